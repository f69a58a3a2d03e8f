//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling. Note that clap's automatic `-V` version
//! flag is intentionally absent: `-V` is the bundle-version override, as it
//! always has been for this tool.

use clap::Parser;
use std::path::PathBuf;

/// macOS application bundler for logbook-kai
#[derive(Parser, Debug)]
#[command(
    name = "logbook_bundler",
    about = "macOS application bundler for logbook-kai",
    long_about = "Packages a logbook-kai archive into a macOS .app bundle and a distributable zip.

Copies a template bundle skeleton, installs the jar, optionally regenerates the
icon via sips/iconutil, writes Info.plist and localization strings, and zips
the result as LogBook-OSX-<version>.zip.

Usage:
  logbook_bundler logbook-kai-3.5.2.jar
  logbook_bundler logbook-kai-3.5.2.zip -D dist -I artwork/logbook.png
  logbook_bundler logbook-kai.jar -V 3.5.2 -B com.example.logbook"
)]
pub struct Args {
    /// logbook-kai archive to bundle (.jar or distribution .zip)
    #[arg(value_name = "FILE")]
    pub archive: PathBuf,

    /// Template directory holding the bundle skeleton
    #[arg(short = 'T', long, value_name = "TMPL_DIR", default_value = "app")]
    pub template: PathBuf,

    /// Output directory for the bundle and the zip
    #[arg(short = 'D', long, value_name = "DEST_DIR", default_value = "build")]
    pub destination: PathBuf,

    /// Application bundle name (".app" appended if missing)
    #[arg(short = 'A', long, value_name = "NAME", default_value = "LogBook.app")]
    pub app_name: String,

    /// Bundle name
    #[arg(short = 'N', long, value_name = "NAME", default_value = "LogBook")]
    pub bundle_name: String,

    /// Bundle identifier
    #[arg(
        short = 'B',
        long,
        value_name = "IDENTIFIER",
        default_value = "com.github.sanaehirotaka.logbook-kai"
    )]
    pub bundle_identifier: String,

    /// Icon source image (.icns copied as-is, anything else resized)
    #[arg(short = 'I', long, value_name = "ICON")]
    pub icon: Option<PathBuf>,

    /// Version string (inferred from the archive file name when omitted)
    #[arg(short = 'V', long, value_name = "VERSION")]
    pub version: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.archive.is_file() {
            return Err(format!(
                "Archive not found: {}",
                self.archive.display()
            ));
        }

        if !self.template.is_dir() {
            return Err(format!(
                "Template directory not found: {}",
                self.template.display()
            ));
        }

        if let Some(icon) = &self.icon
            && !icon.is_file()
        {
            return Err(format!("Icon image not found: {}", icon.display()));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(_args: &Args) -> Self {
        let output = super::OutputManager::new(
            true,  // Always verbose
            false, // Never quiet
        );

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
