//! macOS `.app` bundle assembly for logbook-kai.
//!
//! The bundler transforms an input archive (zip or jar) plus a template
//! directory into a zipped application bundle:
//!
//! 1. [`AppBundler::prepare`] clears previous build artifacts
//! 2. [`template`] copies the skeleton and rewrites the launcher script
//! 3. [`archive`] installs the Java archive into `Contents/Java`
//! 4. [`icon`] optionally regenerates `LogBook.icns` via `sips`/`iconutil`
//! 5. [`plist`] writes the `Info.plist` descriptor
//! 6. [`localization`] writes per-locale `InfoPlist.strings`
//! 7. [`package`] zips the finished bundle tree
//!
//! Every step is fail-fast: the first error aborts the run. All output is
//! rooted under the configured destination directory.

pub mod archive;
pub mod builder;
pub mod checksum;
pub mod error;
pub mod icon;
pub mod layout;
pub mod localization;
pub mod names;
pub mod package;
pub mod plist;
pub mod settings;
pub mod template;
pub mod utils;

// Re-export commonly used types
pub use builder::{AppBundler, BundledArtifact};
pub use error::{Error, Result};
pub use layout::BundleLayout;
pub use settings::{Settings, SettingsBuilder};
