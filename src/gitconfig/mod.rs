// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository configuration store (`<git-dir>/config`).
//!
//! ```text
//! GitConfig::load(&repo)
//!   submodule_names()   registered section names, file order
//!   remove_submodule()  drops one section, keeps the rest byte-identical
//!   save()              rewrite in place, mode 0644
//! ```
//!
//! A view over the `[submodule "<name>"]` sections of the repository's
//! local configuration, obtained from an open repository handle. Like the
//! manifest store it edits raw text, so user settings, remotes and other
//! sections survive a rewrite untouched.

use crate::error::{ConfigError, SubmodResult};
use crate::git;
use crate::utility::fs::write_file;
use gix::bstr::BStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// In-memory copy of the repository's local configuration.
#[derive(Debug, Clone)]
pub struct GitConfig {
    path: PathBuf,
    text: String,
    names: Vec<String>,
}

impl GitConfig {
    /// Loads the local configuration of `repo`.
    ///
    /// A repository without a configuration file yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` on I/O failure and `Parse` for
    /// malformed contents.
    pub fn load(repo: &gix::Repository) -> SubmodResult<Self> {
        let path = git::config_path(repo.git_dir());
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                }
                .into());
            }
        };
        let names = parse_names(&text, &path)?;
        Ok(Self { path, text, names })
    }

    /// Names of the registered submodule sections, in file order.
    #[must_use]
    pub fn submodule_names(&self) -> &[String] {
        &self.names
    }

    /// Removes the named submodule section, returning `true` when one was
    /// present. Non-submodule configuration keeps its original bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the stored text fails to re-parse.
    pub fn remove_submodule(&mut self, name: &str) -> SubmodResult<bool> {
        // The parsed file borrows the stored text, so the rewrite is
        // materialized before the text is replaced.
        let text = {
            let mut file = gix_config::File::try_from(self.text.as_str()).map_err(|e| {
                ConfigError::Parse {
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
        self.names.retain(|n| n != name);
        Ok(true)
    }

    /// Writes the configuration back to disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Write` on I/O failure.
    pub fn save(&self) -> SubmodResult<()> {
        write_file(&self.path, self.text.as_bytes()).map_err(|e| {
            ConfigError::Write {
                path: self.path.display().to_string(),
                source: e,
            }
            .into()
        })
    }
}

fn parse_names(text: &str, path: &Path) -> SubmodResult<Vec<String>> {
    let file = gix_config::File::try_from(text).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let Some(sections) = file.sections_by_name("submodule") else {
        return Ok(Vec::new());
    };
    Ok(sections
        .filter_map(|section| section.header().subsection_name())
        .map(ToString::to_string)
        .collect())
}
