// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitMutation (trait) --> ShellBackend (git CLI)
//! ```
//!
//! The index and submodule mutations the removal sequence needs are not
//! available through gix, so they run as external `git` invocations. The
//! trait keeps the orchestrators testable without spawning processes.

use crate::error::{GitError, SubmodResult};
use std::path::{Path, PathBuf};

/// Git mutation operations that modify repository state.
///
/// All operations run with the top-level project directory as working
/// directory; paths are interpreted relative to it.
pub trait GitMutation {
    /// Stage a pathspec in the index (`git add <pathspec>`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the add operation fails.
    fn stage(&self, top: &Path, pathspec: &str) -> SubmodResult<()>;

    /// Drop a path from the index recursively, leaving the working tree
    /// alone (`git rm --cached -r <path>`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the rm operation fails.
    fn remove_cached(&self, top: &Path, path: &str) -> SubmodResult<()>;

    /// Register a new submodule
    /// (`git submodule add [-b <branch>] <url> [<target>]`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the submodule cannot be added.
    fn add_submodule(
        &self,
        top: &Path,
        url: &str,
        target: Option<&str>,
        branch: Option<&str>,
    ) -> SubmodResult<()>;

    /// Initialize the submodule index from the manifest
    /// (`git submodule init`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the init operation fails.
    fn init_submodules(&self, top: &Path) -> SubmodResult<()>;
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Holds the resolved path of the git executable so a missing git is
/// reported once, at construction, instead of per invocation.
pub struct ShellBackend {
    git: PathBuf,
}

impl ShellBackend {
    /// Locates the git executable on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::GitNotFound` when no git executable is available.
    pub fn new() -> SubmodResult<Self> {
        let git = which::which("git").map_err(|_| GitError::GitNotFound)?;
        Ok(Self { git })
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command(&self, args: &[&str], cwd: &Path) -> SubmodResult<String> {
        use std::process::Command;

        let output = Command::new(&self.git)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitMutation for ShellBackend {
    fn stage(&self, top: &Path, pathspec: &str) -> SubmodResult<()> {
        self.git_command(&["add", pathspec], top)?;
        Ok(())
    }

    fn remove_cached(&self, top: &Path, path: &str) -> SubmodResult<()> {
        self.git_command(&["rm", "--cached", "-r", path], top)?;
        Ok(())
    }

    fn add_submodule(
        &self,
        top: &Path,
        url: &str,
        target: Option<&str>,
        branch: Option<&str>,
    ) -> SubmodResult<()> {
        let mut args = vec!["submodule", "add"];
        if let Some(b) = branch {
            args.extend(&["-b", b]);
        }
        args.push(url);
        if let Some(t) = target {
            args.push(t);
        }
        self.git_command(&args, top)?;
        Ok(())
    }

    fn init_submodules(&self, top: &Path) -> SubmodResult<()> {
        self.git_command(&["submodule", "init"], top)?;
        Ok(())
    }
}
