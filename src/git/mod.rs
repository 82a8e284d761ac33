// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git repository access.
//!
//! ```text
//!          Public API
//!    query.rs      backend/
//!        |             |
//!        v             v
//!      gix        GitMutation
//!   (embedded)      (trait)
//!    .open             |
//!    .init             v
//!    .submodules  ShellBackend
//!                   git CLI
//!                   .stage
//!                   .remove_cached
//!                   .add_submodule
//!                   .init_submodules
//! ```
//!
//! **query**: pure Rust reads, no subprocess.
//! **backend**: git CLI for the index and submodule mutations gix does
//! not provide natively.

use std::path::{Path, PathBuf};

pub mod backend;
pub mod query;


/// Basename of the repository's internal index directory.
pub const DOT_GIT: &str = ".git";

/// Basename of the configuration file inside the git directory.
pub const CONFIG_BASENAME: &str = "config";

/// Basename of the submodule manifest at the top of the working tree.
pub const GITMODULES: &str = ".gitmodules";

/// Basename of the module-cache directory inside the git directory.
pub const MODULES_BASENAME: &str = "modules";

/// Path of the submodule manifest for the project at `top`.
#[must_use]
pub fn manifest_path(top: &Path) -> PathBuf {
    top.join(GITMODULES)
}

/// Path of the configuration file inside `git_dir`.
#[must_use]
pub fn config_path(git_dir: &Path) -> PathBuf {
    git_dir.join(CONFIG_BASENAME)
}

/// Module-cache directory for the submodule checked out at `submodule_path`.
///
/// The cache is keyed by the submodule's path, not its name.
#[must_use]
pub fn module_cache_path(git_dir: &Path, submodule_path: &str) -> PathBuf {
    git_dir.join(MODULES_BASENAME).join(submodule_path)
}
