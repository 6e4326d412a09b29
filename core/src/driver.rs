// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Cache, CacheError, RunConfig, UpdateError};
use std::thread;

/// Runs one full contended update pass: reset the key, launch the
/// configured number of workers, wait for all of them.
///
/// Workers share nothing in-process; the cache entry is the only point of
/// contention. All workers are joined before the first error (if any) is
/// returned.
pub fn run<C: Cache>(cache: &C, config: &RunConfig) -> Result<(), UpdateError> {
    reset(cache, config.key())?;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..config.concurrency())
            .map(|_| scope.spawn(|| worker(cache, config)))
            .collect();

        let mut first_error = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    })
}

/// Deletes the key so every run starts from a clean miss. Deleting an
/// absent key is not an error.
fn reset<C: Cache>(cache: &C, key: &str) -> Result<(), UpdateError> {
    match cache.delete(key) {
        Ok(()) | Err(CacheError::KeyNotFound(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn worker<C: Cache>(cache: &C, config: &RunConfig) -> Result<(), UpdateError> {
    for _ in 0..config.iterations() {
        config
            .strategy()
            .run_once(cache, config.key(), config.max_attempts())?;
    }
    Ok(())
}
