// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-side repository access through gix.

use crate::error::{GitError, GixError, SubmodResult};
use std::path::Path;

/// Opens the repository at `top`.
///
/// # Errors
///
/// Returns `GitError::RepoNotFound` if `top` is not a repository, or a
/// `GixError` for any other open failure.
pub fn open_repository(top: &Path) -> SubmodResult<gix::Repository> {
    match gix::open(top) {
        Ok(repo) => Ok(repo),
        Err(gix::open::Error::NotARepository { .. }) => Err(GitError::RepoNotFound {
            path: top.display().to_string(),
        }
        .into()),
        Err(e) => Err(GitError::Gix(GixError::Open(Box::new(e))).into()),
    }
}

/// Opens the repository at `top`, creating it first if none exists.
///
/// # Errors
///
/// Returns a `GixError` if creation or opening fails.
pub fn ensure_repository(top: &Path) -> SubmodResult<gix::Repository> {
    match gix::open(top) {
        Ok(repo) => Ok(repo),
        Err(gix::open::Error::NotARepository { .. }) => {
            gix::init(top).map_err(|e| GitError::Gix(GixError::Init(Box::new(e))).into())
        }
        Err(e) => Err(GitError::Gix(GixError::Open(Box::new(e))).into()),
    }
}
