//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load the platform configuration with the global flags applied.
//! - Route parsed CLI arguments to the matching command handler.
//! - Print the resulting JSON document to stdout.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code selection (see `error` module).
//!
//! Invariants:
//! - Nothing is written to stdout unless the command succeeded.
//! - `.env` values are merged into the snapshot only, never into the process.

use anyhow::{Context, Result};
use platformsh_config::PlatformConfig;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::routes::RouteSelection;
use crate::error::CliError;

/// Build the configuration requested by the global flags.
pub(crate) fn load_config(cli: &Cli) -> Result<PlatformConfig> {
    debug!(prefix = %cli.prefix, dotenv = !cli.no_dotenv, "Loading platform configuration");
    let mut loader = cli.loader();
    if !cli.no_dotenv {
        loader = loader.load_dotenv()?;
    }
    Ok(loader.build()?)
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let value = match cli.command {
        Commands::Status => commands::status::run(&config)?,
        Commands::Routes {
            upstream,
            primary,
            id,
        } => commands::routes::run(&config, RouteSelection::from_flags(upstream, primary, id))?,
        Commands::Credentials {
            ref name,
            index,
            ref format,
        } => commands::credentials::run(&config, name, index, format.as_deref())
            .with_context(|| format!("Failed to read credentials for '{}'", name))?,
        Commands::Variable {
            ref name,
            ref default,
        } => commands::variables::run_variable(&config, name, default.as_deref())?,
        Commands::Variables => commands::variables::run_variables(&config)?,
        Commands::Application => commands::variables::run_application(&config)?,
        Commands::Property { ref name } => commands::property::run(&config, name)?,
    };

    print_json(&value, cli.compact)
}

fn print_json(value: &Value, compact: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if compact {
        serde_json::to_writer(&mut out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut out, value)?;
    }
    writeln!(out).map_err(CliError::from)?;
    Ok(())
}
