// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod cache;
pub use cache::{Cache, CacheEntry, Fingerprint};

mod cache_error;
pub use cache_error::CacheError;

mod codec;
pub use codec::{decode, encode, MalformedValue};

mod transition;
pub use transition::next_value;

mod strategy;
pub use strategy::Strategy;

mod update_error;
pub use update_error::UpdateError;

mod run_config;
pub use run_config::{ConfigError, RunConfig};

mod driver;
pub use driver::run;

mod verifier;
pub use verifier::{expected_value, verify, Outcome};

mod in_memory_cache;
pub use in_memory_cache::InMemoryCache;
