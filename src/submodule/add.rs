// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule registration.

use std::path::Path;

use tracing::info;

use crate::error::SubmodResult;
use crate::git::backend::GitMutation;

/// Registers the submodule at `url`, optionally under an explicit
/// `target` path and tracking `branch`.
///
/// Registration delegates wholly to the backend's submodule-add
/// command, which clones the repository, writes the manifest entry and
/// stages both.
///
/// # Errors
///
/// Returns a [`GitError`] when the backend invocation fails.
///
/// [`GitError`]: crate::error::GitError
pub fn add_submodule(
    top: &Path,
    url: &str,
    target: Option<&str>,
    branch: Option<&str>,
    backend: &dyn GitMutation,
) -> SubmodResult<()> {
    backend.add_submodule(top, url, target, branch)?;
    info!(url, "submodule registered");
    Ok(())
}
