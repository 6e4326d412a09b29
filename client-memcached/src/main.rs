mod memcached_cache;

use crate::memcached_cache::MemcachedCache;
use clap::{CommandFactory, Parser};
use lost_update_core::{run, verify, RunConfig, Strategy, UpdateError};
use std::process;

// Reference configuration: two workers racing on the same key.
const CONCURRENCY: u32 = 2;

// Exit statuses: 1 for any run failure, 2 for a corrupted stored value.
const EXIT_FAILURE: i32 = 1;
const EXIT_MALFORMED: i32 = 2;

#[derive(Parser)]
struct Args {
    /// memcached host
    #[arg(long)]
    host: String,

    /// memcached port
    #[arg(long)]
    port: u16,

    /// memcached key
    #[arg(long)]
    key: String,

    /// updates per worker
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    iter: u32,

    /// update strategy: atomic|nonatomic
    #[arg(long)]
    strategy: Strategy,
}

fn exit_for(err: UpdateError) -> ! {
    match err {
        UpdateError::Malformed(_) => process::exit(EXIT_MALFORMED),
        _ => process::exit(EXIT_FAILURE),
    }
}

fn main() {
    // A bad command line (including an unknown strategy name) prints the
    // usage and exits with status 1; clap's own error exit would use 2
    // and omits the usage block for invalid values.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            if err.kind() != clap::error::ErrorKind::DisplayHelp {
                let _ = Args::command().print_help();
            }
            process::exit(EXIT_FAILURE);
        }
    };

    let Ok(config) = RunConfig::new(&args.key, args.strategy, CONCURRENCY, args.iter) else {
        process::exit(EXIT_FAILURE);
    };

    let Ok(cache) = MemcachedCache::connect(&args.host, args.port) else {
        process::exit(EXIT_FAILURE);
    };

    if let Err(err) = run(&cache, &config) {
        exit_for(err);
    }

    match verify(&cache, &config) {
        Ok(outcome) => println!("{}", outcome),
        Err(err) => exit_for(err),
    }
}
