// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Cache, CacheEntry, CacheError, Fingerprint};
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

struct Entry {
    value: Vec<u8>,
    fingerprint: Fingerprint,
}

struct Inner {
    entries: HashMap<String, Entry>,
    // Never reused, so a delete/re-insert cannot revive a stale fingerprint.
    next_fingerprint: Fingerprint,
}

/// In-memory `Cache` backend with linearizable per-key semantics.
///
/// A single mutex over the whole map is enough here: the demo contends on
/// one key and the backend only has to make the conditional writes atomic,
/// not fast.
pub struct InMemoryCache {
    inner: Mutex<Inner>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                next_fingerprint: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache for InMemoryCache {
    fn get(&self, key: &str) -> Result<CacheEntry, CacheError> {
        let inner = self.lock();
        match inner.entries.get(key) {
            Some(entry) => Ok(CacheEntry {
                value: entry.value.clone(),
                fingerprint: entry.fingerprint,
            }),
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    fn insert_if_absent(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut inner = self.lock();
        if inner.entries.contains_key(key) {
            return Err(CacheError::KeyAlreadyExists(key.to_string()));
        }
        let fingerprint = inner.next_fingerprint;
        inner.next_fingerprint += 1;
        inner.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                fingerprint,
            },
        );
        Ok(())
    }

    fn replace_if_fingerprint(
        &self,
        key: &str,
        value: &[u8],
        fingerprint: Fingerprint,
    ) -> Result<(), CacheError> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        match inner.entries.get_mut(key) {
            Some(entry) if entry.fingerprint == fingerprint => {
                entry.value = value.to_vec();
                entry.fingerprint = inner.next_fingerprint;
                inner.next_fingerprint += 1;
                Ok(())
            }
            // A vanished entry is reported the same way as a changed one:
            // either way the caller's read is stale.
            _ => Err(CacheError::FingerprintMismatch(key.to_string())),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut inner = self.lock();
        let fingerprint = inner.next_fingerprint;
        inner.next_fingerprint += 1;
        inner.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                fingerprint,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut inner = self.lock();
        match inner.entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }
}
