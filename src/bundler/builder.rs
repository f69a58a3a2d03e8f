//! Bundle orchestration and coordination.
//!
//! This module provides the main [`AppBundler`] orchestrator that runs the
//! fixed assembly pipeline for one build:
//!
//! 1. Clears previous build artifacts
//! 2. Copies the template and wires up the launcher
//! 3. Installs the Java archive
//! 4. Optionally builds the icon
//! 5. Writes the descriptor and localizations
//! 6. Packages the zip and calculates checksum metadata
//!
//! # Example
//!
//! ```no_run
//! use logbook_bundler::bundler::{AppBundler, SettingsBuilder};
//!
//! # async fn example() -> logbook_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .archive("logbook-kai-3.5.2.jar")
//!     .destination("build")
//!     .version(Some("3.5.2".into()))
//!     .build()?;
//!
//! let bundler = AppBundler::new(settings);
//! let artifact = bundler.bundle().await?;
//!
//! println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
//! println!("SHA256: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```

use super::{
    BundleLayout, Result, Settings, archive, checksum::calculate_sha256,
    error::ErrorExt, icon, localization, package, plist, template, utils::fs,
};
use std::path::PathBuf;

/// A produced distributable with verification metadata.
#[derive(Clone, Debug)]
pub struct BundledArtifact {
    /// Path of the zip archive.
    pub path: PathBuf,

    /// Archive size in bytes.
    pub size: u64,

    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
}

/// Main bundler orchestrator.
///
/// Runs the assembly pipeline strictly in sequence; the first failing step
/// aborts the whole run. The destination directory is assumed to be owned
/// exclusively by this run.
#[derive(Debug)]
pub struct AppBundler {
    settings: Settings,
    layout: BundleLayout,
}

impl AppBundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        let layout = BundleLayout::new(&settings);
        Self { settings, layout }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns a reference to the derived bundle layout.
    pub fn layout(&self) -> &BundleLayout {
        &self.layout
    }

    /// Executes the full assembly pipeline and returns the artifact.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        log::info!("Building {}", self.settings.app_name());

        self.prepare().await?;
        template::copy_template(&self.settings, &self.layout).await?;
        archive::install(self.settings.archive(), &self.layout).await?;

        if let Some(icon_source) = self.settings.icon() {
            icon::build_icon(icon_source, &self.layout).await?;
        } else {
            log::debug!("No icon supplied - keeping the template icon");
        }

        plist::write_descriptor(&self.settings, &self.layout).await?;
        localization::write_localizations(&self.layout).await?;
        let zip_path = package::package_zip(&self.settings, &self.layout).await?;

        let metadata = tokio::fs::metadata(&zip_path)
            .await
            .fs_context("reading artifact metadata", &zip_path)?;
        let checksum = calculate_sha256(&zip_path).await?;

        log::info!("✓ Bundled {}", self.settings.app_name());

        Ok(BundledArtifact {
            path: zip_path,
            size: metadata.len(),
            checksum,
        })
    }

    /// Clears previous build artifacts at the destination.
    ///
    /// Removes the app directory and both scratch directories. Absent paths
    /// are ignored, so running this on an already-clean destination is a
    /// no-op.
    pub async fn prepare(&self) -> Result<()> {
        for dir in [
            self.layout.app_dir(),
            self.layout.iconset_dir(),
            self.layout.extract_dir(),
        ] {
            fs::remove_dir_all(dir)
                .await
                .fs_context("clearing previous build artifacts", dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::SettingsBuilder;

    #[tokio::test]
    async fn prepare_twice_is_safe() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = SettingsBuilder::new()
            .archive("logbook-kai.jar")
            .destination(dir.path())
            .build()
            .expect("settings");
        let bundler = AppBundler::new(settings);

        tokio::fs::create_dir_all(bundler.layout().app_dir())
            .await
            .expect("mkdir");

        bundler.prepare().await.expect("first prepare");
        assert!(!bundler.layout().app_dir().exists());
        bundler.prepare().await.expect("second prepare is a no-op");
    }
}
