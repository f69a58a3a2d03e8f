//! End-to-end assembly tests against temporary build trees.

use logbook_bundler::bundler::{AppBundler, BundleLayout, Settings, SettingsBuilder};
use std::io::Write;
use std::path::Path;

const JAR_BYTES: &[u8] = b"PK\x03\x04 logbook-kai payload";

const LAUNCHER_TEMPLATE: &str = "\
#!/usr/bin/python
BUNDLE_IDENTIFIER = 'logbook_bundle_identifier_placeholder'
BUNDLE_NAME = 'logbook_bundle_name_placeholder'
ICON_NAME = 'logbook_icon_name_placeholder'
";

/// Builds a minimal template skeleton: the launcher plus a stray
/// `.DS_Store` that the copy must drop.
fn write_template(root: &Path) {
    let macos_dir = root.join("Contents/MacOS");
    std::fs::create_dir_all(&macos_dir).expect("template dirs");
    std::fs::write(macos_dir.join("LogBook.py"), LAUNCHER_TEMPLATE).expect("launcher");
    std::fs::write(root.join("Contents/.DS_Store"), b"junk").expect("metadata file");
}

fn settings(dir: &Path, archive: &Path, version: Option<&str>) -> Settings {
    let template = dir.join("app");
    write_template(&template);

    SettingsBuilder::new()
        .archive(archive)
        .template(&template)
        .destination(dir.join("build"))
        .version(version.map(String::from))
        .build()
        .expect("settings")
}

fn read_plist_version(layout: &BundleLayout) -> String {
    let value = plist::Value::from_file(layout.info_plist()).expect("descriptor");
    value
        .as_dictionary()
        .and_then(|d| d.get("CFBundleShortVersionString"))
        .and_then(plist::Value::as_string)
        .expect("version key")
        .to_string()
}

#[tokio::test]
async fn jar_source_yields_a_complete_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = dir.path().join("logbook-kai-3.5.2.jar");
    std::fs::write(&jar, JAR_BYTES).expect("jar");

    let bundler = AppBundler::new(settings(dir.path(), &jar, Some("3.5.2")));
    let artifact = bundler.bundle().await.expect("bundle");

    let layout = bundler.layout();

    // Jar installed byte-for-byte
    let installed = std::fs::read(layout.jar()).expect("installed jar");
    assert_eq!(installed, JAR_BYTES);

    // Launcher substituted, no token left behind
    let launcher = std::fs::read_to_string(layout.launcher()).expect("launcher");
    assert!(!launcher.contains("placeholder"));
    assert!(launcher.contains("com.github.sanaehirotaka.logbook-kai"));
    assert!(launcher.contains("LogBook.icns"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(layout.launcher())
            .expect("launcher metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    // Metadata files stripped during the copy
    assert!(!layout.contents_dir().join(".DS_Store").exists());

    // Descriptor and localizations in place
    assert_eq!(read_plist_version(layout), "3.5.2");
    assert!(
        layout
            .resources_dir()
            .join("en.lproj/InfoPlist.strings")
            .is_file()
    );
    assert!(
        layout
            .resources_dir()
            .join("ja.lproj/InfoPlist.strings")
            .is_file()
    );

    // Artifact report
    assert_eq!(
        artifact.path.file_name().and_then(|n| n.to_str()),
        Some("LogBook-OSX-3.5.2.zip")
    );
    assert!(artifact.size > 0);
    assert_eq!(artifact.checksum.len(), 64);

    // The zip carries the bundle tree rooted at the .app directory
    let file = std::fs::File::open(&artifact.path).expect("open zip");
    let mut zip = zip::ZipArchive::new(file).expect("read zip");
    assert!(
        zip.by_name("LogBook.app/Contents/Java/logbook-kai.jar")
            .is_ok()
    );
}

#[tokio::test]
async fn zip_source_yields_an_identical_jar() {
    let dir = tempfile::tempdir().expect("tempdir");

    let zip_source = dir.path().join("logbook-kai-3.5.2.zip");
    let file = std::fs::File::create(&zip_source).expect("create zip");
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("logbook-kai.jar", zip::write::SimpleFileOptions::default())
        .expect("entry");
    writer.write_all(JAR_BYTES).expect("entry bytes");
    writer.finish().expect("finish");

    let bundler = AppBundler::new(settings(dir.path(), &zip_source, Some("3.5.2")));
    bundler.bundle().await.expect("bundle");

    let installed = std::fs::read(bundler.layout().jar()).expect("installed jar");
    assert_eq!(installed, JAR_BYTES);
}

#[tokio::test]
async fn version_defaults_flow_into_descriptor_and_archive_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = dir.path().join("logbook-kai.jar");
    std::fs::write(&jar, JAR_BYTES).expect("jar");

    let bundler = AppBundler::new(settings(dir.path(), &jar, None));
    let artifact = bundler.bundle().await.expect("bundle");

    assert_eq!(read_plist_version(bundler.layout()), "1");
    assert_eq!(
        artifact.path.file_name().and_then(|n| n.to_str()),
        Some("LogBook-OSX-1.zip")
    );
}

#[tokio::test]
async fn rebuilding_over_a_previous_run_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = dir.path().join("logbook-kai-2.0.jar");
    std::fs::write(&jar, JAR_BYTES).expect("jar");

    let bundler = AppBundler::new(settings(dir.path(), &jar, Some("2.0")));
    bundler.bundle().await.expect("first build");
    let artifact = bundler.bundle().await.expect("second build");

    assert!(artifact.path.is_file());
}
