// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SubmodError (16 bytes)
//!                    |
//!   +------+--------+--------+--------+----+
//!   |      |        |        |        |    |
//!   v      v        v        v        v    v
//!  Git  Manifest  Config   Remove    Fs   Io
//!  Box    Box      Box      Box     Box  Box
//!
//! Sub-errors (unboxed internally):
//!   Git      RepoNotFound, GitNotFound, CommandFailed, Gix
//!   Manifest NotFound, Read, Parse, Write, Delete
//!   Config   Read, Parse, Write
//!   Remove   NotRegistered, StepFailed(RemoveStep)
//!   Fs       IoError
//!
//! All variants boxed => SubmodError fits in 16 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SubmodError`].
pub type SubmodResult<T> = std::result::Result<T, SubmodError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum SubmodError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Submodule manifest error.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Repository configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Submodule removal error.
    #[error("remove error: {0}")]
    Remove(#[from] Box<RemoveError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SubmodError {
                fn from(err: $error) -> Self {
                    SubmodError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ManifestError => Manifest,
    ConfigError => Config,
    RemoveError => Remove,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Failed to initialize repository.
    #[error("failed to initialize repository: {0}")]
    Init(#[from] Box<gix::init::Error>),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// The git executable is not on `PATH`.
    #[error("git executable not found in PATH")]
    GitNotFound,

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Manifest Errors ---

/// Submodule manifest (`.gitmodules`) errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file missing from the top-level project.
    #[error("manifest not found: {path}")]
    NotFound { path: String },

    /// Failed to read the manifest file.
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed manifest contents.
    #[error("failed to parse manifest '{path}': {message}")]
    Parse { path: String, message: String },

    /// Failed to write the manifest file.
    #[error("failed to write manifest '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete an emptied manifest file.
    #[error("failed to delete manifest '{path}': {source}")]
    Delete {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Repository configuration (`.git/config`) errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration contents.
    #[error("failed to parse config '{path}': {message}")]
    Parse { path: String, message: String },

    /// Failed to write the configuration file.
    #[error("failed to write config '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Remove Errors ---

/// Steps of the submodule removal sequence, in execution order.
///
/// Removal mutates four independent stores with no rollback; when a step
/// fails, this tag tells the caller exactly how far the removal got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStep {
    /// Resolve the submodule's name and path from the manifest.
    Locate,
    /// Rewrite or delete the manifest file.
    UpdateManifest,
    /// Stage the manifest change in the index.
    StageManifest,
    /// Rewrite the repository configuration.
    UpdateConfig,
    /// Drop the submodule's entry from the index.
    UnregisterIndex,
    /// Delete the module-cache directory.
    PurgeModuleCache,
    /// Delete the working-tree directory.
    PurgeWorktree,
}

impl RemoveStep {
    /// Short string representation for log and error output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Locate => "locate",
            Self::UpdateManifest => "update-manifest",
            Self::StageManifest => "stage-manifest",
            Self::UpdateConfig => "update-config",
            Self::UnregisterIndex => "unregister-index",
            Self::PurgeModuleCache => "purge-module-cache",
            Self::PurgeWorktree => "purge-worktree",
        }
    }
}

impl std::fmt::Display for RemoveStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submodule removal errors.
#[derive(Debug, Error)]
pub enum RemoveError {
    /// No submodule matches the requested URL.
    #[error("no submodule registered with URL: {url}")]
    NotRegistered { url: String },

    /// A removal step failed. Earlier steps are not rolled back, so the
    /// repository may be left partially migrated.
    #[error("removal failed at step '{step}': {source}")]
    StepFailed {
        step: RemoveStep,
        #[source]
        source: Box<SubmodError>,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
