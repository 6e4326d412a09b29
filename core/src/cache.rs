// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CacheError;

/// Opaque version marker returned alongside a read. A conditional replace
/// succeeds only while the entry still carries the fingerprint the caller
/// last observed.
pub type Fingerprint = u64;

/// A stored value together with the fingerprint it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub value: Vec<u8>,
    pub fingerprint: Fingerprint,
}

/// Trait for abstracting the shared key-value cache.
///
/// All exclusion between concurrent writers is delegated to the backend:
/// `insert_if_absent` and `replace_if_fingerprint` must be atomic with
/// respect to each other and to `set` for a single key.
pub trait Cache: Send + Sync {
    /// Get the stored value and its current fingerprint.
    /// Returns `KeyNotFound` on a cache miss.
    fn get(&self, key: &str) -> Result<CacheEntry, CacheError>;

    /// Create the entry only if the key is absent.
    /// Returns `KeyAlreadyExists` if another writer created it first.
    fn insert_if_absent(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Replace the entry only if it still carries `fingerprint`.
    /// Returns `FingerprintMismatch` if the entry changed or vanished
    /// since the fingerprint was read.
    fn replace_if_fingerprint(
        &self,
        key: &str,
        value: &[u8],
        fingerprint: Fingerprint,
    ) -> Result<(), CacheError>;

    /// Unconditional insert-or-overwrite.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove the entry. Returns `KeyNotFound` if the key was absent.
    fn delete(&self, key: &str) -> Result<(), CacheError>;
}
