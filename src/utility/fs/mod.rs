// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers for store rewrites and directory purges.

use crate::error::{FsError, SubmodResult};
use std::io::ErrorKind;
use std::path::Path;

/// Writes `contents` to `path`, creating or truncating the file.
///
/// On Unix the file mode is forced to 0644, the mode the manifest and
/// configuration files are persisted with.
///
/// # Errors
///
/// Returns the underlying I/O error; callers wrap it with store context.
pub fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))?;
    }
    Ok(())
}

/// Recursively removes the tree at `path`.
///
/// An already-absent target counts as success. A plain file at `path` is
/// removed like a tree.
///
/// # Errors
///
/// Returns an `FsError` for any other I/O failure.
pub fn remove_tree(path: &Path) -> SubmodResult<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotADirectory => {
            std::fs::remove_file(path).map_err(|e| {
                FsError::IoError {
                    path: path.display().to_string(),
                    source: e,
                }
                .into()
            })
        }
        Err(e) => Err(FsError::IoError {
            path: path.display().to_string(),
            source: e,
        }
        .into()),
    }
}
