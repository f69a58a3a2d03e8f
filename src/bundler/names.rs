//! Fixed file names, tokens, and defaults used throughout the bundle.

/// Launcher script inside `Contents/MacOS/`.
pub const EXECUTABLE_NAME: &str = "LogBook.py";

/// Icon file inside `Contents/Resources/`.
pub const ICON_FILE_NAME: &str = "LogBook.icns";

/// Iconset scratch directory created next to the bundle.
pub const ICONSET_NAME: &str = "LogBook.iconset";

/// Jar file name inside `Contents/Java/`, also the name expected at the
/// root of an extracted distribution zip.
pub const JAR_NAME: &str = "logbook-kai.jar";

/// Extraction scratch directory for zip sources.
pub const EXTRACT_DIR_NAME: &str = "logbook-kai";

/// Default application bundle name.
pub const DEFAULT_APP_NAME: &str = "LogBook.app";

/// Default bundle identifier.
pub const DEFAULT_BUNDLE_IDENTIFIER: &str = "com.github.sanaehirotaka.logbook-kai";

/// Default bundle name.
pub const DEFAULT_BUNDLE_NAME: &str = "LogBook";

/// Display name written to the descriptor.
pub const DISPLAY_NAME: &str = "LogBook";

/// Placeholder tokens rewritten in the launcher script.
pub const IDENTIFIER_PLACEHOLDER: &str = "logbook_bundle_identifier_placeholder";
pub const BUNDLE_NAME_PLACEHOLDER: &str = "logbook_bundle_name_placeholder";
pub const ICON_NAME_PLACEHOLDER: &str = "logbook_icon_name_placeholder";

/// Localized bundle names written as `InfoPlist.strings`, one `.lproj`
/// directory per locale.
pub const LOCALIZED_BUNDLE_NAMES: &[(&str, &str)] = &[("en", "LogBook"), ("ja", "航海日誌")];

/// Version used in the descriptor and archive name when none is supplied.
pub const DEFAULT_VERSION: &str = "1";

/// Returns the name of the distributable zip for a version.
pub fn archive_name(version: &str) -> String {
    format!("LogBook-OSX-{}.zip", version)
}
