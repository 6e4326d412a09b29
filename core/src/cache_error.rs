// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key was not found (Get or Delete on a non-existent key)
    KeyNotFound(String),

    /// Key already exists (insert_if_absent lost the race to create it)
    KeyAlreadyExists(String),

    /// The entry no longer carries the fingerprint the caller read
    /// (replace_if_fingerprint lost the race to update it)
    FingerprintMismatch(String),

    /// Connectivity or protocol error from the backend
    Backend(String),
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::KeyNotFound(key) => write!(f, "Key '{}' not found", key),
            CacheError::KeyAlreadyExists(key) => write!(f, "Key '{}' already exists", key),
            CacheError::FingerprintMismatch(key) => {
                write!(f, "Key '{}' changed since it was read", key)
            }
            CacheError::Backend(msg) => write!(f, "Cache backend error: {}", msg),
        }
    }
}

impl std::error::Error for CacheError {}
