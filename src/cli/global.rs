// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C/--top DIR      ← Top-level project directory (env: SUBMOD_TOP)
//! -l/--log-level N  ← Console verbosity 0-5 (env: SUBMOD_LOG_LEVEL)
//!
//! Precedence: CLI flags > environment > defaults
//! ```

use std::path::PathBuf;

use clap::Args;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Top-level project directory; all stores are resolved against it.
    /// Defaults to the current directory.
    #[arg(short = 'C', long = "top", value_name = "DIR", env = "SUBMOD_TOP")]
    pub top: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", env = "SUBMOD_LOG_LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,
}

impl GlobalOptions {
    /// Resolves the top-level project directory, falling back to the
    /// current directory.
    ///
    /// # Errors
    ///
    /// Returns an error when no directory was given and the current
    /// directory cannot be determined.
    pub fn resolve_top(&self) -> std::io::Result<PathBuf> {
        match &self.top {
            Some(top) => Ok(top.clone()),
            None => std::env::current_dir(),
        }
    }
}
