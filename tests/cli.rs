//! Binary-level CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const LAUNCHER_TEMPLATE: &str = "\
#!/usr/bin/python
BUNDLE_IDENTIFIER = 'logbook_bundle_identifier_placeholder'
BUNDLE_NAME = 'logbook_bundle_name_placeholder'
ICON_NAME = 'logbook_icon_name_placeholder'
";

fn write_template(root: &Path) {
    let macos_dir = root.join("Contents/MacOS");
    std::fs::create_dir_all(&macos_dir).expect("template dirs");
    std::fs::write(macos_dir.join("LogBook.py"), LAUNCHER_TEMPLATE).expect("launcher");
}

fn bundler() -> Command {
    Command::cargo_bin("logbook_bundler").expect("binary")
}

#[test]
fn version_is_inferred_from_the_archive_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("app");
    write_template(&template);

    let jar = dir.path().join("logbook-kai-3.5.2.jar");
    std::fs::write(&jar, b"jar bytes").expect("jar");

    let destination = dir.path().join("build");
    bundler()
        .arg(&jar)
        .arg("-T")
        .arg(&template)
        .arg("-D")
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    // Archive named after the inferred version
    assert!(destination.join("LogBook-OSX-3.5.2.zip").is_file());

    // Descriptor carries the inferred version
    let value = plist::Value::from_file(destination.join("LogBook.app/Contents/Info.plist"))
        .expect("descriptor");
    let version = value
        .as_dictionary()
        .and_then(|d| d.get("CFBundleShortVersionString"))
        .and_then(plist::Value::as_string)
        .expect("version key")
        .to_string();
    assert_eq!(version, "3.5.2");
}

#[test]
fn explicit_version_flag_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("app");
    write_template(&template);

    let jar = dir.path().join("logbook-kai-3.5.2.jar");
    std::fs::write(&jar, b"jar bytes").expect("jar");

    let destination = dir.path().join("build");
    bundler()
        .arg(&jar)
        .arg("-T")
        .arg(&template)
        .arg("-D")
        .arg(&destination)
        .arg("-V")
        .arg("9.9.9")
        .assert()
        .success();

    assert!(destination.join("LogBook-OSX-9.9.9.zip").is_file());
}

#[test]
fn missing_archive_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("app");
    write_template(&template);

    bundler()
        .arg(dir.path().join("no-such-archive.jar"))
        .arg("-T")
        .arg(&template)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Archive not found"));
}

#[test]
fn missing_template_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jar = dir.path().join("logbook-kai-1.0.jar");
    std::fs::write(&jar, b"jar bytes").expect("jar");

    bundler()
        .arg(&jar)
        .arg("-T")
        .arg(dir.path().join("no-such-template"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template directory not found"));
}

#[test]
fn custom_app_name_gets_the_app_suffix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("app");
    write_template(&template);

    let jar = dir.path().join("logbook-kai-1.0.jar");
    std::fs::write(&jar, b"jar bytes").expect("jar");

    let destination = dir.path().join("build");
    bundler()
        .arg(&jar)
        .arg("-T")
        .arg(&template)
        .arg("-D")
        .arg(&destination)
        .arg("-A")
        .arg("Journal")
        .assert()
        .success();

    assert!(destination.join("Journal.app").is_dir());
}
