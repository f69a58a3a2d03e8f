//! Distributable zip packaging.

use super::{
    BundleLayout, Settings,
    error::{Context, Result},
    names,
    utils::fs,
};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Zips the finished bundle tree into `LogBook-OSX-<version>.zip`.
///
/// Every file and directory below the `.app` root becomes an archive entry,
/// named relative to the destination directory so the archive unpacks to
/// `<AppName>.app/...`. A prior archive of the same name is replaced.
///
/// Returns the path of the written archive.
pub async fn package_zip(settings: &Settings, layout: &BundleLayout) -> Result<PathBuf> {
    let zip_path = settings
        .destination()
        .join(names::archive_name(settings.version_or_default()));

    fs::remove_file(&zip_path).await?;

    log::info!("Packaging {}", zip_path.display());

    let app_dir = layout.app_dir().to_path_buf();
    let destination = settings.destination().to_path_buf();
    let out = zip_path.clone();

    // The zip crate is blocking; offload like the directory copy
    tokio::task::spawn_blocking(move || write_zip(&app_dir, &destination, &out))
        .await
        .map_err(|e| {
            crate::bundler::Error::GenericError(format!("Packaging task panicked: {}", e))
        })??;

    log::info!("✓ Created archive: {}", zip_path.display());
    Ok(zip_path)
}

/// Walks the app tree and writes each entry into the archive.
fn write_zip(app_dir: &Path, destination: &Path, zip_path: &Path) -> Result<()> {
    let file = std::fs::File::create(zip_path)?;
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    let mut buffer = Vec::new();
    for entry in walkdir::WalkDir::new(app_dir) {
        let entry = entry?;
        // The .app root itself gets no entry, matching the tree walk
        if entry.depth() == 0 {
            continue;
        }

        let name = entry_name(entry.path(), destination)?;
        if entry.file_type().is_dir() {
            writer.add_directory(format!("{}/", name), options)?;
        } else {
            writer.start_file(name, options)?;
            buffer.clear();
            std::fs::File::open(entry.path())?.read_to_end(&mut buffer)?;
            writer.write_all(&buffer)?;
        }
    }

    writer.finish()?;
    Ok(())
}

/// Builds a forward-slash entry name relative to the destination directory.
fn entry_name(path: &Path, destination: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(destination)
        .ok()
        .context("bundle entry escapes the destination directory")?;

    let parts: Vec<&str> = relative
        .components()
        .map(|c| {
            c.as_os_str()
                .to_str()
                .context("bundle entry name contains invalid UTF-8")
        })
        .collect::<Result<_>>()?;
    Ok(parts.join("/"))
}
