//! LogBook Bundler - macOS application bundler for logbook-kai.
//!
//! This binary packages a logbook-kai Java archive into a macOS .app bundle
//! and produces a distributable zip with proper error handling and artifact
//! verification.

mod bundler;
mod cli;
mod error;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
