//! Build configuration for a single bundling run.

use super::names;
use std::path::{Path, PathBuf};

/// Main settings for a bundling run.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// Immutable for the duration of a build.
///
/// # Examples
///
/// ```no_run
/// use logbook_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> logbook_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .archive("logbook-kai-3.5.2.jar")
///     .destination("build")
///     .version(Some("3.5.2".into()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`super::BundleLayout`] - Paths derived from these settings
#[derive(Clone, Debug)]
pub struct Settings {
    /// Bundle directory name, always `.app`-suffixed.
    app_name: String,

    /// Bundle identifier in reverse domain notation.
    bundle_identifier: String,

    /// Bundle name shown by the system.
    bundle_name: String,

    /// Output directory. Every derived path lives under it.
    destination: PathBuf,

    /// Template skeleton to copy the bundle from.
    template: PathBuf,

    /// Source archive (`.jar` or distribution `.zip`).
    archive: PathBuf,

    /// Source image for icon generation. None skips the icon step.
    icon: Option<PathBuf>,

    /// Version string. None falls back to descriptor defaults.
    version: Option<String>,
}

impl Settings {
    /// Returns the `.app` directory name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the bundle identifier.
    pub fn bundle_identifier(&self) -> &str {
        &self.bundle_identifier
    }

    /// Returns the bundle name.
    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    /// Returns the output directory.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Returns the template skeleton directory.
    pub fn template(&self) -> &Path {
        &self.template
    }

    /// Returns the source archive path.
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// Returns the icon source image, if one was supplied.
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// Returns the version string, if one was supplied or inferred.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the version string, falling back to the descriptor default.
    pub fn version_or_default(&self) -> &str {
        self.version.as_deref().unwrap_or(names::DEFAULT_VERSION)
    }
}

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API with the same defaults as the CLI. Only the source
/// archive is required; the app name is normalized to carry a `.app` suffix.
///
/// # Examples
///
/// ```no_run
/// use logbook_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> logbook_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .archive("dist/logbook-kai-3.5.2.zip")
///     .template("app")
///     .destination("build")
///     .app_name("LogBook")
///     .build()?;
/// assert_eq!(settings.app_name(), "LogBook.app");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    app_name: Option<String>,
    bundle_identifier: Option<String>,
    bundle_name: Option<String>,
    destination: Option<PathBuf>,
    template: Option<PathBuf>,
    archive: Option<PathBuf>,
    icon: Option<PathBuf>,
    version: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the application bundle name.
    ///
    /// A `.app` suffix is appended at build time if missing.
    ///
    /// Default: `LogBook.app`
    pub fn app_name<S: Into<String>>(mut self, name: S) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Sets the bundle identifier.
    ///
    /// Default: `com.github.sanaehirotaka.logbook-kai`
    pub fn bundle_identifier<S: Into<String>>(mut self, identifier: S) -> Self {
        self.bundle_identifier = Some(identifier.into());
        self
    }

    /// Sets the bundle name.
    ///
    /// Default: `LogBook`
    pub fn bundle_name<S: Into<String>>(mut self, name: S) -> Self {
        self.bundle_name = Some(name.into());
        self
    }

    /// Sets the output directory.
    ///
    /// Default: `build`
    pub fn destination<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.destination = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the template skeleton directory.
    ///
    /// Default: `app`
    pub fn template<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.template = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the source archive path.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn archive<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.archive = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the icon source image.
    ///
    /// Default: None (icon step skipped)
    pub fn icon(mut self, path: Option<PathBuf>) -> Self {
        self.icon = path;
        self
    }

    /// Sets the version string.
    ///
    /// Default: None (descriptor defaults apply)
    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the source archive is missing.
    pub fn build(self) -> super::Result<Settings> {
        use super::error::Context;

        let mut app_name = self
            .app_name
            .unwrap_or_else(|| names::DEFAULT_APP_NAME.to_string());
        if !app_name.ends_with(".app") {
            app_name.push_str(".app");
        }

        Ok(Settings {
            app_name,
            bundle_identifier: self
                .bundle_identifier
                .unwrap_or_else(|| names::DEFAULT_BUNDLE_IDENTIFIER.to_string()),
            bundle_name: self
                .bundle_name
                .unwrap_or_else(|| names::DEFAULT_BUNDLE_NAME.to_string()),
            destination: self.destination.unwrap_or_else(|| PathBuf::from("build")),
            template: self.template.unwrap_or_else(|| PathBuf::from("app")),
            archive: self.archive.context("archive is required")?,
            icon: self.icon,
            version: self.version,
        })
    }
}
