// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule removal.
//!
//! A registered submodule leaves traces in four stores, and removal
//! walks them in a fixed order:
//!
//! ```text
//! 1 locate              scan the manifest for the URL, last match wins
//! 2 update-manifest     rewrite .gitmodules, delete it when emptied
//! 3 stage-manifest      git add .gitmodules
//! 4 update-config       drop [submodule "<name>"] from .git/config
//! 5 unregister-index    git rm --cached -r <path>
//! 6 purge-module-cache  remove <git-dir>/modules/<path>
//! 7 purge-worktree      remove <top>/<path>
//! ```
//!
//! There is no rollback. A failure stops the sequence and reports the
//! failing step; everything already done stays done, so retrying after
//! fixing the cause is the recovery path.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{RemoveError, RemoveStep, SubmodError, SubmodResult};
use crate::git::backend::GitMutation;
use crate::git::query::open_repository;
use crate::git::{self, module_cache_path};
use crate::gitconfig::GitConfig;
use crate::manifest::Manifest;
use crate::utility::fs::remove_tree;

/// Identity of a submodule resolved during removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedSubmodule {
    pub name: String,
    pub url: String,
    pub path: String,
}

/// Unregisters the submodule registered with `url` from the project at
/// `top`.
///
/// Runs the seven-step sequence from the module docs, mutating the
/// manifest, the repository configuration, the index and the on-disk
/// directories in that order. On success the resolved identity of the
/// removed submodule is returned.
///
/// # Errors
///
/// Returns [`RemoveError::NotRegistered`] when no manifest entry matches
/// `url`; in that case nothing has been touched. Every other failure is
/// reported as [`RemoveError::StepFailed`] tagged with the failing step,
/// and steps already completed are not rolled back.
pub fn remove_submodule(
    top: &Path,
    url: &str,
    backend: &dyn GitMutation,
) -> SubmodResult<RemovedSubmodule> {
    let mut manifest =
        Manifest::load(top).map_err(|e| step_failed(RemoveStep::Locate, e))?;
    let Some(entry) = manifest.find_by_url(url) else {
        return Err(RemoveError::NotRegistered { url: url.to_string() }.into());
    };
    let removed = RemovedSubmodule {
        name: entry.name.clone(),
        url: entry.url.clone(),
        path: entry.path.clone(),
    };
    debug!(name = %removed.name, path = %removed.path, "located submodule");

    update_manifest(&mut manifest, &removed.name)
        .map_err(|e| step_failed(RemoveStep::UpdateManifest, e))?;

    backend
        .stage(top, git::GITMODULES)
        .map_err(|e| step_failed(RemoveStep::StageManifest, e))?;

    let repo = open_repository(top)
        .map_err(|e| step_failed(RemoveStep::UpdateConfig, e))?;
    update_config(&repo, &removed.name)
        .map_err(|e| step_failed(RemoveStep::UpdateConfig, e))?;

    backend
        .remove_cached(top, &removed.path)
        .map_err(|e| step_failed(RemoveStep::UnregisterIndex, e))?;

    remove_tree(&module_cache_path(repo.git_dir(), &removed.path))
        .map_err(|e| step_failed(RemoveStep::PurgeModuleCache, e))?;

    remove_tree(&top.join(&removed.path))
        .map_err(|e| step_failed(RemoveStep::PurgeWorktree, e))?;

    info!(name = %removed.name, url = %removed.url, "submodule removed");
    Ok(removed)
}

/// Drops `name` from the manifest, then deletes the file when it holds
/// no entries anymore and rewrites it otherwise.
fn update_manifest(manifest: &mut Manifest, name: &str) -> SubmodResult<()> {
    manifest.remove(name)?;
    if manifest.is_empty() {
        debug!("manifest emptied, deleting it");
        manifest.delete()
    } else {
        manifest.save()
    }
}

/// Drops the `[submodule "<name>"]` section from the repository
/// configuration. A name the configuration never knew is not an error;
/// the manifest is the authority on registration.
fn update_config(repo: &gix::Repository, name: &str) -> SubmodResult<()> {
    let mut config = GitConfig::load(repo)?;
    if config.remove_submodule(name)? {
        config.save()?;
    }
    Ok(())
}

fn step_failed(step: RemoveStep, source: SubmodError) -> SubmodError {
    warn!(step = step.as_str(), error = %source, "removal step failed");
    RemoveError::StepFailed { step, source: Box::new(source) }.into()
}
