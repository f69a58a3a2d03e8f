//! File system utilities for bundling.
//!
//! Provides safe file operations with automatic directory creation,
//! symlink preservation, and comprehensive error handling.

use crate::bundler::error::Result;
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if
/// specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    Ok(fs::create_dir_all(path).await?)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

/// Removes the file if it exists.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(crate::bundler::error::Error::GenericError(format!(
            "{from:?} does not exist"
        )));
    }
    if !from.is_file() {
        return Err(crate::bundler::error::Error::GenericError(format!(
            "{from:?} is not a file"
        )));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Preserves symlinks on platforms that support them. Entries whose file
/// name matches `skip` are left behind; the bundler uses this to drop
/// `.DS_Store` files while copying the template.
///
/// Fails if the source path is not a directory or doesn't exist.
pub async fn copy_dir_filtered(from: &Path, to: &Path, skip: &'static [&'static str]) -> Result<()> {
    // Validate in async context (cheap, doesn't need spawn_blocking)
    if !from.exists() {
        return Err(crate::bundler::error::Error::GenericError(format!(
            "{from:?} does not exist"
        )));
    }
    if !from.is_dir() {
        return Err(crate::bundler::error::Error::GenericError(format!(
            "{from:?} is not a Directory"
        )));
    }

    // Clone paths for move into blocking closure
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking work to dedicated thread pool
    tokio::task::spawn_blocking(move || {
        // Create destination parent (all sync from here)
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Blocking iteration is OK in spawn_blocking
        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry?;
            debug_assert!(entry.path().starts_with(&from));
            if let Some(name) = entry.file_name().to_str()
                && skip.contains(&name)
            {
                continue;
            }
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_symlink() {
                let target = std::fs::read_link(entry.path())?;
                if entry.path().is_dir() {
                    symlink_dir(&target, &dest_path)?;
                } else {
                    symlink_file(&target, &dest_path)?;
                }
            } else if entry.file_type().is_dir() {
                std::fs::create_dir_all(dest_path)?;
            } else {
                std::fs::copy(entry.path(), dest_path)?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| {
        crate::bundler::error::Error::GenericError(format!("Directory copy task panicked: {}", e))
    })?
}

/// Sets the executable bit on a file.
///
/// No-op on platforms without Unix permissions.
pub async fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).await?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}
