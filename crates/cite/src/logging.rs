/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Log output for the command line.
//!
//! Logs go to stderr so citations on stdout stay pipeable. `RUST_LOG`
//! overrides the level picked from `-v` flags.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a level: warn, info, debug, trace.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbose: u8) {
    let level = level_from_verbosity(verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
