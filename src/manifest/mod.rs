// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule manifest store (`.gitmodules`).
//!
//! ```text
//! Manifest::load(top)
//!   entries()      typed view, file order
//!   find_by_url()  last match wins
//!   remove()       drops one section, keeps the rest byte-identical
//!   save()         rewrite in place, mode 0644
//!   delete()       remove an emptied manifest from disk
//! ```

use crate::error::{ManifestError, SubmodResult};
use crate::git;
use crate::utility::fs::write_file;
use gix::bstr::BStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One `[submodule "<name>"]` entry of the manifest.
///
/// `url` and `path` default to empty strings when the section omits the
/// key; the parse is structural only and does not validate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleEntry {
    pub name: String,
    pub url: String,
    pub path: String,
    pub branch: Option<String>,
}

/// In-memory copy of a project's submodule manifest.
///
/// Holds the raw file text alongside a typed, file-ordered projection of
/// its submodule sections. Mutations edit the raw text through the config
/// parser, so unrelated sections, comments and formatting survive a
/// rewrite.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    text: String,
    entries: Vec<SubmoduleEntry>,
}

impl Manifest {
    /// Loads the manifest of the project at `top`.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::NotFound` when the file does not exist,
    /// `Read` for other I/O failures, and `Parse` for malformed contents.
    pub fn load(top: &Path) -> SubmodResult<Self> {
        let path = git::manifest_path(top);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ManifestError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                ManifestError::Read {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;
        let entries = parse_entries(&text, &path)?;
        Ok(Self {
            path,
            text,
            entries,
        })
    }

    /// Typed entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[SubmoduleEntry] {
        &self.entries
    }

    /// True when no submodule sections remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry registered for `url`.
    ///
    /// When several entries share a URL, the latest one in file order
    /// wins.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&SubmoduleEntry> {
        self.entries.iter().rev().find(|entry| entry.url == url)
    }

    /// Removes the named submodule section, returning `true` when one was
    /// present. Other sections keep their original bytes.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Parse` if the stored text fails to re-parse.
    pub fn remove(&mut self, name: &str) -> SubmodResult<bool> {
        // The parsed file borrows the stored text, so the rewrite is
        // materialized before the text is replaced.
        let text = {
            let mut file = gix_config::File::try_from(self.text.as_str()).map_err(|e| {
                ManifestError::Parse {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            if file
                .remove_section("submodule", Some(BStr::new(name)))
                .is_none()
            {
                return Ok(false);
            }
            file.to_bstring().to_string()
        };
        self.text = text;
        self.entries.retain(|entry| entry.name != name);
        Ok(true)
    }

    /// Writes the manifest back to disk.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Write` on I/O failure.
    pub fn save(&self) -> SubmodResult<()> {
        write_file(&self.path, self.text.as_bytes()).map_err(|e| {
            ManifestError::Write {
                path: self.path.display().to_string(),
                source: e,
            }
            .into()
        })
    }

    /// Deletes the manifest file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Delete` on I/O failure.
    pub fn delete(&self) -> SubmodResult<()> {
        std::fs::remove_file(&self.path).map_err(|e| {
            ManifestError::Delete {
                path: self.path.display().to_string(),
                source: e,
            }
            .into()
        })
    }
}

fn parse_entries(text: &str, path: &Path) -> SubmodResult<Vec<SubmoduleEntry>> {
    let file = gix_config::File::try_from(text).map_err(|e| ManifestError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let Some(sections) = file.sections_by_name("submodule") else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for section in sections {
        // A bare [submodule] section has no name and carries no entry
        let Some(name) = section.header().subsection_name() else {
            continue;
        };
        let value = |key: &str| section.value(key).map(|v| v.to_string());
        entries.push(SubmoduleEntry {
            name: name.to_string(),
            url: value("url").unwrap_or_default(),
            path: value("path").unwrap_or_default(),
            branch: value("branch"),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests;
