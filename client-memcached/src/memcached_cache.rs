// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lost_update_core::{Cache, CacheEntry, CacheError, Fingerprint};
use memcache::{Client, CommandError, MemcacheError};
use std::collections::HashMap;

// Writes never expire; the run reads its result back immediately.
const NEVER_EXPIRE: u32 = 0;

/// `Cache` backend over a live memcached server. The server's CAS id is
/// the fingerprint; `add` and `cas` supply the atomic insert-if-absent and
/// conditional-replace primitives the atomic strategy relies on.
pub struct MemcachedCache {
    client: Client,
}

impl MemcachedCache {
    pub fn connect(host: &str, port: u16) -> Result<Self, MemcacheError> {
        let client = memcache::connect(format!("memcache://{}:{}", host, port))?;
        Ok(Self { client })
    }
}

fn backend_error(err: MemcacheError) -> CacheError {
    CacheError::Backend(err.to_string())
}

impl Cache for MemcachedCache {
    fn get(&self, key: &str) -> Result<CacheEntry, CacheError> {
        let mut found: HashMap<String, (Vec<u8>, u32, Option<u64>)> =
            self.client.gets(&[key]).map_err(backend_error)?;
        match found.remove(key) {
            Some((value, _flags, Some(cas_id))) => Ok(CacheEntry {
                value,
                fingerprint: cas_id,
            }),
            // gets must always return a CAS id; a hit without one means
            // the server did not speak the protocol we need.
            Some((_, _, None)) => Err(CacheError::Backend(format!(
                "server returned no CAS id for key '{}'",
                key
            ))),
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    fn insert_if_absent(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        match self.client.add(key, value, NEVER_EXPIRE) {
            Ok(()) => Ok(()),
            Err(MemcacheError::CommandError(CommandError::KeyExists)) => {
                Err(CacheError::KeyAlreadyExists(key.to_string()))
            }
            Err(e) => Err(backend_error(e)),
        }
    }

    fn replace_if_fingerprint(
        &self,
        key: &str,
        value: &[u8],
        fingerprint: Fingerprint,
    ) -> Result<(), CacheError> {
        match self.client.cas(key, value, NEVER_EXPIRE, fingerprint) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CacheError::FingerprintMismatch(key.to_string())),
            // The server reports a lost CAS race as KeyExists and a
            // concurrently deleted entry as KeyNotFound; both just mean
            // our read went stale.
            Err(MemcacheError::CommandError(
                CommandError::KeyExists | CommandError::KeyNotFound,
            )) => Err(CacheError::FingerprintMismatch(key.to_string())),
            Err(e) => Err(backend_error(e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.client
            .set(key, value, NEVER_EXPIRE)
            .map_err(backend_error)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match self.client.delete(key) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CacheError::KeyNotFound(key.to_string())),
            Err(MemcacheError::CommandError(CommandError::KeyNotFound)) => {
                Err(CacheError::KeyNotFound(key.to_string()))
            }
            Err(e) => Err(backend_error(e)),
        }
    }
}
