//! Java archive installation into `Contents/Java`.

use super::{
    BundleLayout,
    error::{Context, ErrorExt, Result},
    names,
    utils::fs,
};
use crate::bail;
use std::path::Path;

/// Installs the source archive's jar into the bundle.
///
/// A `.jar` source is copied directly. Anything else is treated as a
/// distribution zip: it is extracted into the scratch directory and the jar
/// expected at its root (`logbook-kai.jar`) is copied into the bundle.
/// Fails if the expected jar is absent after extraction.
pub async fn install(source: &Path, layout: &BundleLayout) -> Result<()> {
    let is_jar = source.extension().and_then(|e| e.to_str()) == Some("jar");

    if is_jar {
        copy_jar(source, layout).await
    } else {
        extract_zip(source, layout).await?;
        let extracted = layout.extract_dir().join(names::JAR_NAME);
        if !extracted.is_file() {
            bail!(
                "archive {} does not contain {} at its root",
                source.display(),
                names::JAR_NAME
            );
        }
        copy_jar(&extracted, layout)
            .await
            .with_context(|| format!("installing jar extracted from {}", source.display()))
    }
}

/// Copies a jar into `Contents/Java/logbook-kai.jar`.
async fn copy_jar(source: &Path, layout: &BundleLayout) -> Result<()> {
    let destination = layout.jar();
    log::info!("Installing jar: {}", destination.display());
    fs::copy_file(source, &destination).await
}

/// Extracts a distribution zip into the scratch directory.
async fn extract_zip(source: &Path, layout: &BundleLayout) -> Result<()> {
    log::info!("Extracting {}", source.display());

    let source = source.to_path_buf();
    let extract_dir = layout.extract_dir().to_path_buf();

    // The zip crate is blocking; offload like the directory copy
    tokio::task::spawn_blocking(move || -> Result<()> {
        let file = std::fs::File::open(&source).fs_context("opening archive", &source)?;
        let mut archive = zip::ZipArchive::new(file)?;
        archive.extract(&extract_dir)?;
        Ok(())
    })
    .await
    .map_err(|e| {
        crate::bundler::Error::GenericError(format!("Archive extraction task panicked: {}", e))
    })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::SettingsBuilder;
    use std::io::Write;

    fn layout(dir: &Path) -> BundleLayout {
        let settings = SettingsBuilder::new()
            .archive("unused")
            .destination(dir)
            .build()
            .expect("settings");
        BundleLayout::new(&settings)
    }

    fn write_zip(path: &Path, entry_name: Option<&str>) {
        let file = std::fs::File::create(path).expect("create zip");
        let mut writer = zip::ZipWriter::new(file);
        if let Some(name) = entry_name {
            writer
                .start_file(name, zip::write::SimpleFileOptions::default())
                .expect("start entry");
            writer.write_all(b"jar bytes").expect("write entry");
        }
        writer.finish().expect("finish zip");
    }

    #[tokio::test]
    async fn jar_source_is_copied_byte_for_byte() {
        let dir = tempfile::tempdir().expect("tempdir");
        let jar = dir.path().join("logbook-kai-3.5.2.jar");
        tokio::fs::write(&jar, b"PK\x03\x04 payload")
            .await
            .expect("write jar");

        let layout = layout(&dir.path().join("build"));
        install(&jar, &layout).await.expect("install");

        let installed = tokio::fs::read(layout.jar()).await.expect("read installed");
        assert_eq!(installed, b"PK\x03\x04 payload");
    }

    #[tokio::test]
    async fn zip_source_is_extracted_then_copied() {
        let dir = tempfile::tempdir().expect("tempdir");
        let zip_path = dir.path().join("logbook-kai-3.5.2.zip");
        write_zip(&zip_path, Some("logbook-kai.jar"));

        let layout = layout(&dir.path().join("build"));
        install(&zip_path, &layout).await.expect("install");

        let installed = tokio::fs::read(layout.jar()).await.expect("read installed");
        assert_eq!(installed, b"jar bytes");
    }

    #[tokio::test]
    async fn zip_without_the_jar_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let zip_path = dir.path().join("logbook-kai-3.5.2.zip");
        write_zip(&zip_path, Some("README.md"));

        let layout = layout(&dir.path().join("build"));
        let result = install(&zip_path, &layout).await;
        assert!(result.is_err());
    }
}
