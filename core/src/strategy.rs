// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{decode, encode, next_value, Cache, CacheError, UpdateError};

/// How a worker applies one read-compute-write cycle to the shared key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Compare-and-swap retry: conditional writes, loops until one lands.
    /// Never loses an update.
    Atomic,

    /// Last-write-wins: unconditional overwrite, no conflict detection.
    /// Concurrent writers can clobber each other's updates. This is the
    /// defect the demo exists to show.
    Nonatomic,
}

impl Strategy {
    /// Applies one update to `key`: read the current value (a miss counts
    /// as "no prior value"), advance it, write it back.
    ///
    /// `max_attempts` bounds the compare-and-swap loop; `None` retries
    /// until a write lands, which is the reference behavior. The
    /// last-write-wins strategy ignores it, one attempt is all it makes.
    pub fn run_once<C: Cache>(
        &self,
        cache: &C,
        key: &str,
        max_attempts: Option<u32>,
    ) -> Result<(), UpdateError> {
        match self {
            Strategy::Atomic => compare_and_swap_retry(cache, key, max_attempts),
            Strategy::Nonatomic => last_write_wins(cache, key),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Strategy::Atomic => "atomic",
            Strategy::Nonatomic => "nonatomic",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atomic" => Ok(Strategy::Atomic),
            "nonatomic" => Ok(Strategy::Nonatomic),
            _ => Err(format!(
                "Unknown strategy '{}' (expected atomic|nonatomic)",
                s
            )),
        }
    }
}

fn last_write_wins<C: Cache>(cache: &C, key: &str) -> Result<(), UpdateError> {
    let current = match cache.get(key) {
        Ok(entry) => Some(decode(&entry.value)?),
        Err(CacheError::KeyNotFound(_)) => None,
        Err(e) => return Err(e.into()),
    };
    // Between the read above and this write another worker may have moved
    // the value on; the overwrite then silently discards that update.
    cache.set(key, &encode(next_value(current)))?;
    Ok(())
}

fn compare_and_swap_retry<C: Cache>(
    cache: &C,
    key: &str,
    max_attempts: Option<u32>,
) -> Result<(), UpdateError> {
    let mut attempts: u32 = 0;
    loop {
        if let Some(max) = max_attempts {
            if attempts >= max {
                return Err(UpdateError::AttemptsExhausted {
                    key: key.to_string(),
                    attempts,
                });
            }
        }
        attempts = attempts.saturating_add(1);

        match cache.get(key) {
            Err(CacheError::KeyNotFound(_)) => {
                let first = encode(next_value(None));
                match cache.insert_if_absent(key, &first) {
                    Ok(()) => return Ok(()),
                    // Another worker created the entry first; re-read it.
                    Err(CacheError::KeyAlreadyExists(_)) => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            Ok(entry) => {
                let current = decode(&entry.value)?;
                let next = encode(next_value(Some(current)));
                match cache.replace_if_fingerprint(key, &next, entry.fingerprint) {
                    Ok(()) => return Ok(()),
                    // The entry moved (or vanished) under us; re-read it.
                    Err(CacheError::FingerprintMismatch(_)) => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}
