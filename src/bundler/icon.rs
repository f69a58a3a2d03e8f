//! Icon generation via `sips` and `iconutil`.
//!
//! The icon pipeline resizes a source image into the ten fixed iconset
//! resolutions with `sips`, then compiles them into a single `.icns` with
//! `iconutil`. Both tools are invoked as opaque subprocesses; a `.icns`
//! source short-circuits the whole pipeline with a plain copy.

use super::{
    BundleLayout,
    error::{Context, ErrorExt, Result},
    utils::fs,
};
use crate::bail;
use std::path::Path;
use std::sync::LazyLock;

/// Iconset base sizes; each is emitted at standard and @2x resolution.
const ICON_SIZES: &[u32] = &[16, 32, 128, 256, 512];

/// Check if sips is available for icon resizing.
///
/// Cached result to avoid repeated subprocess calls during bundling.
static HAS_SIPS: LazyLock<bool> = LazyLock::new(|| tool_available("sips"));

/// Check if iconutil is available for icns compilation.
static HAS_ICONUTIL: LazyLock<bool> = LazyLock::new(|| tool_available("iconutil"));

fn tool_available(name: &str) -> bool {
    match which::which(name) {
        Ok(path) => {
            log::debug!("Found {} at: {}", name, path.display());
            true
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", name, e);
            false
        }
    }
}

/// Builds the bundle icon from a source image.
///
/// # Process
///
/// 1. `.icns` sources are copied directly into `Contents/Resources`
/// 2. Other images are resized into the iconset scratch directory
///    (`icon_{N}x{N}.png` and `icon_{N}x{N}@2x.png` for N in
///    16/32/128/256/512) via `sips`
/// 3. `iconutil -c icns` compiles the iconset into the final `.icns`
///
/// Fails fast when the required external tools are not on PATH.
pub async fn build_icon(source: &Path, layout: &BundleLayout) -> Result<()> {
    let destination = layout.icon();

    if source.extension().and_then(|e| e.to_str()) == Some("icns") {
        log::info!("Copying prebuilt icon: {}", source.display());
        return fs::copy_file(source, &destination).await;
    }

    if !*HAS_SIPS || !*HAS_ICONUTIL {
        bail!(
            "icon generation requires sips and iconutil on PATH; \
             pass a prebuilt .icns instead"
        );
    }

    log::info!("Generating iconset from {}", source.display());
    let iconset_dir = layout.iconset_dir();
    fs::create_dir_all(iconset_dir, false)
        .await
        .fs_context("creating iconset directory", iconset_dir)?;

    for &size in ICON_SIZES {
        resize_icon(source, iconset_dir, size, false).await?;
        resize_icon(source, iconset_dir, size, true).await?;
    }

    compile_icns(iconset_dir, &destination).await?;
    log::info!("✓ Created icon: {}", destination.display());
    Ok(())
}

/// Resizes the source image to one iconset entry with `sips`.
///
/// Retina entries carry an `@2x` suffix and double the pixel resolution.
async fn resize_icon(source: &Path, iconset_dir: &Path, size: u32, retina: bool) -> Result<()> {
    let (resolution, suffix) = if retina {
        (size * 2, "@2x")
    } else {
        (size, "")
    };
    let filename = format!("icon_{0}x{0}{1}.png", size, suffix);
    let output = iconset_dir.join(filename);

    let resolution = resolution.to_string();
    let status = tokio::process::Command::new("sips")
        .arg("-z")
        .arg(&resolution)
        .arg(&resolution)
        .arg(source)
        .arg("--out")
        .arg(&output)
        .status()
        .await
        .map_err(|e| {
            crate::bundler::Error::GenericError(format!("Failed to execute sips: {}", e))
        })?;

    if !status.success() {
        bail!("sips failed with exit code: {:?}", status.code());
    }
    Ok(())
}

/// Compiles the iconset directory into a `.icns` with `iconutil`.
async fn compile_icns(iconset_dir: &Path, destination: &Path) -> Result<()> {
    let iconset_str = iconset_dir
        .to_str()
        .context("iconset path contains invalid UTF-8")?;
    let destination_str = destination
        .to_str()
        .context("icon path contains invalid UTF-8")?;

    let status = tokio::process::Command::new("iconutil")
        .args(["-c", "icns", "-o", destination_str, iconset_str])
        .status()
        .await
        .map_err(|e| {
            crate::bundler::Error::GenericError(format!("Failed to execute iconutil: {}", e))
        })?;

    if !status.success() {
        bail!("iconutil failed with exit code: {:?}", status.code());
    }
    Ok(())
}
