//! Error types and context helpers for bundle assembly.

use std::path::Path;
use thiserror::Error;

/// Result type alias for bundle assembly operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling an application bundle.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Zip archive errors (extraction or packaging)
    #[error("zip error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Directory traversal errors
    #[error("walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Path prefix errors while relativizing bundle paths
    #[error("path prefix error: {0}")]
    PathPrefixError(#[from] std::path::StripPrefixError),

    /// Info.plist serialization errors
    #[error("plist error: {0}")]
    PlistError(#[from] plist::Error),

    /// Generic errors with a formatted message
    #[error("{0}")]
    GenericError(String),
}

/// Early-return with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)).into())
    };
}

/// Attach a static message to an `Option` or fallible result.
pub trait Context<T> {
    /// Converts to [`Result`], using `msg` as the error message.
    fn context(self, msg: &str) -> Result<T>;

    /// Converts to [`Result`], computing the error message lazily.
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(f()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {}", msg, e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {}", f(), e)))
    }
}

/// File-system flavored context: message plus the path being operated on.
pub trait ErrorExt<T> {
    /// Converts to [`Result`], recording the action and the affected path.
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T, E: std::fmt::Display> ErrorExt<T> for std::result::Result<T, E> {
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|e| {
            Error::GenericError(format!("{} ({}): {}", action, path.display(), e))
        })
    }
}
