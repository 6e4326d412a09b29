// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Argument parsing fails before any connection is made, so these run
// without a memcached server.

use std::process::Command;

fn run_with_args(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_lost-update-memcached"))
        .args(args)
        .output()
        .expect("failed to launch binary")
}

#[test]
fn unknown_strategy_prints_usage_and_exits_one() {
    let output = run_with_args(&[
        "--host",
        "127.0.0.1",
        "--port",
        "11211",
        "--key",
        "ctr",
        "--iter",
        "3",
        "--strategy",
        "optimistic",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stderr.contains("optimistic"), "stderr was: {}", stderr);
    // The usage block is printed in addition to clap's error line.
    assert!(
        stdout.contains("Usage:") || stderr.contains("Usage:"),
        "no usage block; stdout: {} stderr: {}",
        stdout,
        stderr
    );
}

#[test]
fn missing_arguments_exit_one() {
    let output = run_with_args(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn zero_iterations_are_rejected_at_parse_time() {
    let output = run_with_args(&[
        "--host",
        "127.0.0.1",
        "--port",
        "11211",
        "--key",
        "ctr",
        "--iter",
        "0",
        "--strategy",
        "atomic",
    ]);
    assert_eq!(output.status.code(), Some(1));
}
