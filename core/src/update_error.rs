// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CacheError, MalformedValue};

/// Failure of an update run. Contention outcomes (`KeyAlreadyExists`,
/// `FingerprintMismatch`) never appear here: the strategies absorb them by
/// retrying. What remains is corruption, backend failure, or the bounded
/// retry hook giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// The stored bytes do not decode to a counter value. Fatal.
    Malformed(MalformedValue),

    /// Unexpected cache failure (connectivity, protocol, missing final value)
    Cache(CacheError),

    /// The bounded compare-and-swap loop gave up before a write succeeded
    AttemptsExhausted { key: String, attempts: u32 },
}

impl std::fmt::Display for UpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateError::Malformed(inner) => write!(f, "{}", inner),
            UpdateError::Cache(inner) => write!(f, "{}", inner),
            UpdateError::AttemptsExhausted { key, attempts } => {
                write!(
                    f,
                    "Gave up updating key '{}' after {} contended attempts",
                    key, attempts
                )
            }
        }
    }
}

impl std::error::Error for UpdateError {}

impl From<MalformedValue> for UpdateError {
    fn from(inner: MalformedValue) -> Self {
        UpdateError::Malformed(inner)
    }
}

impl From<CacheError> for UpdateError {
    fn from(inner: CacheError) -> Self {
        UpdateError::Cache(inner)
    }
}
