// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{decode, next_value, Cache, RunConfig, UpdateError};

/// What a run produced versus what a lossless run would have produced.
///
/// `expected` is computed by replaying the transition sequentially, so it
/// is exact for the compare-and-swap strategy and a ceiling for
/// last-write-wins. Divergence is reported, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub expected: u64,
    pub actual: u64,
}

impl Outcome {
    /// True when no update was lost.
    pub fn converged(&self) -> bool {
        self.expected == self.actual
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected: {}, actual: {}", self.expected, self.actual)
    }
}

/// Replays the transition `total_updates()` times from the initial miss,
/// purely in-process. `RunConfig` guarantees at least one update, so the
/// replay always lands on a concrete value.
pub fn expected_value(config: &RunConfig) -> u64 {
    let mut value = next_value(None);
    for _ in 1..config.total_updates() {
        value = next_value(Some(value));
    }
    value
}

/// Reads the final value back and pairs it with the recomputed
/// expectation. A missing or malformed final value is a failure of the
/// run, not a divergence.
pub fn verify<C: Cache>(cache: &C, config: &RunConfig) -> Result<Outcome, UpdateError> {
    let entry = cache.get(config.key())?;
    let actual = decode(&entry.value)?;
    Ok(Outcome {
        expected: expected_value(config),
        actual,
    })
}
