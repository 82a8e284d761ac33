// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule listing.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::{ManifestError, SubmodError, SubmodResult};
use crate::git::query::open_repository;
use crate::manifest::Manifest;

/// Lists registered submodules as a URL to path mapping, sorted by URL.
///
/// The view is the working tree's manifest file, never the index or HEAD
/// copy, so a completed removal disappears from the listing immediately
/// and a repository without a manifest yields an empty mapping. Entries
/// sharing a URL collapse to one; the last one in manifest order wins.
///
/// # Errors
///
/// Returns [`GitError::RepoNotFound`] when `top` is not a repository,
/// or a [`ManifestError`] when the manifest cannot be read or parsed.
///
/// [`GitError::RepoNotFound`]: crate::error::GitError::RepoNotFound
/// [`ManifestError`]: crate::error::ManifestError
pub fn list_submodules(top: &Path) -> SubmodResult<BTreeMap<String, String>> {
    open_repository(top)?;

    let manifest = match Manifest::load(top) {
        Ok(manifest) => manifest,
        Err(SubmodError::Manifest(err)) if matches!(*err, ManifestError::NotFound { .. }) => {
            return Ok(BTreeMap::new());
        }
        Err(err) => return Err(err),
    };
    debug!(count = manifest.entries().len(), "enumerated submodules");

    let mut mapping = BTreeMap::new();
    for entry in manifest.entries() {
        mapping.insert(entry.url.clone(), entry.path.clone());
    }
    Ok(mapping)
}
