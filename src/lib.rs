//! macOS application bundler library for logbook-kai.
//!
//! This library provides the core bundling functionality for packaging a
//! logbook-kai Java archive into a macOS `.app` bundle:
//! - Template skeleton copy with launcher script substitution
//! - Jar installation (direct copy or zip extraction)
//! - Icon generation via `sips` and `iconutil`
//! - `Info.plist` and localization strings
//! - Distributable zip packaging
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
