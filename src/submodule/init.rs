// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository initialization.

use std::path::Path;

use tracing::info;

use crate::error::SubmodResult;
use crate::git::backend::GitMutation;
use crate::git::query::ensure_repository;

/// Ensures a repository exists at `top` and initializes its submodule
/// configuration from the manifest.
///
/// An already-initialized repository is reused as-is, so the call is
/// idempotent.
///
/// # Errors
///
/// Returns a [`GixError`] when the repository can be neither opened nor
/// created, or a [`GitError`] when submodule initialization fails.
///
/// [`GixError`]: crate::error::GixError
/// [`GitError`]: crate::error::GitError
pub fn init_repository(top: &Path, backend: &dyn GitMutation) -> SubmodResult<()> {
    ensure_repository(top)?;
    backend.init_submodules(top)?;
    info!(top = %top.display(), "repository ready");
    Ok(())
}
