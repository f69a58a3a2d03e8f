//! Crate-level error types for bundler operations.
//!
//! This module defines the top-level error types returned by the CLI layer,
//! wrapping the bundler-internal errors with actionable messages.

use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
