//! Paths derived from the build settings.

use super::{Settings, names};
use std::path::{Path, PathBuf};

/// Derived bundle paths for one run.
///
/// Computed deterministically from [`Settings`]; recomputed each run and
/// discarded after. Every path is rooted under the destination directory.
#[derive(Clone, Debug)]
pub struct BundleLayout {
    app_dir: PathBuf,
    contents_dir: PathBuf,
    macos_dir: PathBuf,
    java_dir: PathBuf,
    resources_dir: PathBuf,
    iconset_dir: PathBuf,
    extract_dir: PathBuf,
}

impl BundleLayout {
    /// Computes the layout for the given settings.
    pub fn new(settings: &Settings) -> Self {
        let destination = settings.destination();
        let app_dir = destination.join(settings.app_name());
        let contents_dir = app_dir.join("Contents");

        Self {
            macos_dir: contents_dir.join("MacOS"),
            java_dir: contents_dir.join("Java"),
            resources_dir: contents_dir.join("Resources"),
            iconset_dir: destination.join(names::ICONSET_NAME),
            extract_dir: destination.join(names::EXTRACT_DIR_NAME),
            app_dir,
            contents_dir,
        }
    }

    /// The `.app` bundle root.
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// `Contents` inside the bundle.
    pub fn contents_dir(&self) -> &Path {
        &self.contents_dir
    }

    /// `Contents/MacOS`, home of the launcher script.
    pub fn macos_dir(&self) -> &Path {
        &self.macos_dir
    }

    /// `Contents/Java`, home of the jar.
    pub fn java_dir(&self) -> &Path {
        &self.java_dir
    }

    /// `Contents/Resources`, home of the icon and `.lproj` directories.
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Iconset scratch directory, next to the bundle.
    pub fn iconset_dir(&self) -> &Path {
        &self.iconset_dir
    }

    /// Zip extraction scratch directory, next to the bundle.
    pub fn extract_dir(&self) -> &Path {
        &self.extract_dir
    }

    /// Full path of the launcher script.
    pub fn launcher(&self) -> PathBuf {
        self.macos_dir.join(names::EXECUTABLE_NAME)
    }

    /// Full path of the installed jar.
    pub fn jar(&self) -> PathBuf {
        self.java_dir.join(names::JAR_NAME)
    }

    /// Full path of the bundle icon.
    pub fn icon(&self) -> PathBuf {
        self.resources_dir.join(names::ICON_FILE_NAME)
    }

    /// Full path of the descriptor.
    pub fn info_plist(&self) -> PathBuf {
        self.contents_dir.join("Info.plist")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::SettingsBuilder;

    #[test]
    fn every_path_is_rooted_under_the_destination() {
        let settings = SettingsBuilder::new()
            .archive("logbook-kai.jar")
            .destination("out")
            .build()
            .expect("settings");
        let layout = BundleLayout::new(&settings);

        for path in [
            layout.app_dir(),
            layout.contents_dir(),
            layout.macos_dir(),
            layout.java_dir(),
            layout.resources_dir(),
            layout.iconset_dir(),
            layout.extract_dir(),
        ] {
            assert!(path.starts_with("out"), "{} escapes out/", path.display());
        }
        assert!(layout.launcher().starts_with("out"));
        assert!(layout.jar().starts_with("out"));
        assert!(layout.icon().starts_with("out"));
        assert!(layout.info_plist().starts_with("out"));
    }

    #[test]
    fn bundle_tree_matches_the_platform_layout() {
        let settings = SettingsBuilder::new()
            .archive("logbook-kai.jar")
            .destination("build")
            .build()
            .expect("settings");
        let layout = BundleLayout::new(&settings);

        assert_eq!(
            layout.launcher(),
            Path::new("build/LogBook.app/Contents/MacOS/LogBook.py")
        );
        assert_eq!(
            layout.jar(),
            Path::new("build/LogBook.app/Contents/Java/logbook-kai.jar")
        );
        assert_eq!(
            layout.icon(),
            Path::new("build/LogBook.app/Contents/Resources/LogBook.icns")
        );
        assert_eq!(layout.iconset_dir(), Path::new("build/LogBook.iconset"));
        assert_eq!(layout.extract_dir(), Path::new("build/logbook-kai"));
    }
}
