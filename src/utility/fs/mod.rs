// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Filesystem helpers for the plist write path.

use std::path::Path;

use crate::error::{FsError, Result};


/// Creates `dir` with owner-only permissions (0700) if it does not exist.
///
/// No-op when the directory is already present; existing permissions are left
/// untouched. Creation is single-level, so a missing parent is an error.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_private_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        tracing::trace!(dir = %dir.display(), "directory already exists");
        return Ok(());
    }

    let mut builder = std::fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(dir).map_err(|e| FsError::CreateDir {
        path: dir.display().to_string(),
        source: e,
    })?;

    tracing::debug!(dir = %dir.display(), "created directory");
    Ok(())
}

/// Writes `contents` to `path`, fully replacing any existing file.
///
/// The write is not atomic (no temp-then-rename); a crash mid-write can
/// leave a truncated file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_replace(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| FsError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
