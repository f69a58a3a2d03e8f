//! Command line interface for the logbook bundler.
//!
//! This module provides the CLI for bundling operations, with proper
//! argument parsing, command execution, and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let runtime_config = RuntimeConfig::from(&args);
    commands::bundle::execute(&args, &runtime_config).await?;
    Ok(0)
}
