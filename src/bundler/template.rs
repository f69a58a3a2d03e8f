//! Template skeleton copy and launcher script substitution.

use super::{
    BundleLayout, Settings,
    error::{ErrorExt, Result},
    names,
    utils::fs,
};
use crate::bail;
use std::path::Path;

/// OS metadata files dropped while copying the template.
const METADATA_FILES: &[&str] = &[".DS_Store"];

/// Copies the template tree into the bundle directory and wires up the
/// launcher script.
///
/// # Process
///
/// 1. Recursively copies the template, dropping `.DS_Store` files
/// 2. Ensures `Contents/Java` and `Contents/Resources` exist
/// 3. Rewrites the three placeholder tokens in the launcher script
/// 4. Sets the launcher executable
///
/// Fails if the template does not contain the launcher at
/// `Contents/MacOS/LogBook.py`.
pub async fn copy_template(settings: &Settings, layout: &BundleLayout) -> Result<()> {
    log::info!("Copying template from {}", settings.template().display());

    fs::copy_dir_filtered(settings.template(), layout.app_dir(), METADATA_FILES).await?;

    for dir in [layout.java_dir(), layout.resources_dir()] {
        fs::create_dir_all(dir, false)
            .await
            .fs_context("creating bundle directory", dir)?;
    }

    let launcher = layout.launcher();
    if !launcher.is_file() {
        bail!(
            "template {} has no launcher at Contents/MacOS/{}",
            settings.template().display(),
            names::EXECUTABLE_NAME
        );
    }

    rewrite_launcher(settings, &launcher).await?;
    fs::set_executable(&launcher).await?;

    log::debug!("✓ Launcher ready: {}", launcher.display());
    Ok(())
}

/// Rewrites the placeholder tokens in the launcher script in place.
async fn rewrite_launcher(settings: &Settings, launcher: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(launcher)
        .await
        .fs_context("reading launcher script", launcher)?;

    let content = substitute_placeholders(&content, settings);

    tokio::fs::write(launcher, content)
        .await
        .fs_context("writing launcher script", launcher)?;
    Ok(())
}

/// Replaces every placeholder token with its configured value.
///
/// Total and idempotent: no token survives, and re-running on already
/// substituted content changes nothing.
pub fn substitute_placeholders(content: &str, settings: &Settings) -> String {
    content
        .replace(names::IDENTIFIER_PLACEHOLDER, settings.bundle_identifier())
        .replace(names::BUNDLE_NAME_PLACEHOLDER, settings.bundle_name())
        .replace(names::ICON_NAME_PLACEHOLDER, names::ICON_FILE_NAME)
}
