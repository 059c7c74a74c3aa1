//! platformsh-cli - inspect the Platform.sh deployment environment.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install logging on stderr.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Decoding or gating platform data (see `platformsh-config`).
//!
//! Invariants:
//! - stdout carries only the JSON result; logs and errors go to stderr.
//! - Log verbosity is controlled by `RUST_LOG`.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
