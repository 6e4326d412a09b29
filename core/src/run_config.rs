// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Strategy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyKey,
    ZeroConcurrency,
    ZeroIterations,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyKey => write!(f, "Key must not be empty"),
            ConfigError::ZeroConcurrency => write!(f, "Concurrency must be at least 1"),
            ConfigError::ZeroIterations => write!(f, "Iterations must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// One run of the demo: which key to contend on, with which strategy, and
/// how hard. Built once at startup and passed by reference everywhere.
#[derive(Debug, Clone)]
pub struct RunConfig {
    key: String,
    strategy: Strategy,
    concurrency: u32,
    iterations: u32,
    max_attempts: Option<u32>,
}

impl RunConfig {
    pub fn new(
        key: &str,
        strategy: Strategy,
        concurrency: u32,
        iterations: u32,
    ) -> Result<Self, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        if concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(Self {
            key: key.to_string(),
            strategy,
            concurrency,
            iterations,
            max_attempts: None,
        })
    }

    /// Bounds the compare-and-swap retry loop. Left unset in normal runs;
    /// tests use it to assert the loop cannot livelock forever.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn concurrency(&self) -> u32 {
        self.concurrency
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Updates applied across the whole run. At least 1 by construction.
    pub fn total_updates(&self) -> u64 {
        u64::from(self.concurrency) * u64::from(self.iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RunConfig};
    use crate::Strategy;

    #[test]
    fn valid_config_is_accepted() {
        let config = RunConfig::new("ctr", Strategy::Atomic, 2, 3).unwrap();
        assert_eq!(config.total_updates(), 6);
        assert_eq!(config.max_attempts(), None);
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(
            RunConfig::new("", Strategy::Atomic, 2, 3).unwrap_err(),
            ConfigError::EmptyKey
        );
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        assert_eq!(
            RunConfig::new("ctr", Strategy::Atomic, 0, 3).unwrap_err(),
            ConfigError::ZeroConcurrency
        );
    }

    #[test]
    fn zero_iterations_is_rejected() {
        assert_eq!(
            RunConfig::new("ctr", Strategy::Nonatomic, 2, 0).unwrap_err(),
            ConfigError::ZeroIterations
        );
    }
}
