// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for submod using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! submod [global options] <command>
//! init
//! add <url> [target]
//! remove <url>
//! list
//! version
//! ```

pub mod global;
pub mod submodule;


use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;
use crate::cli::submodule::{AddArgs, ListArgs, RemoveArgs};

/// Git Submodule Registration Manager
///
/// Keeps a repository's submodule registration consistent across its
/// four stores.
#[derive(Debug, Parser)]
#[command(
    name = "submod",
    author,
    version,
    about = "Git Submodule Registration Manager",
    long_about = "submod Copyright (C) 2026 submod contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Keeps a repository's submodule registration consistent across\n\
                  the .gitmodules manifest, the repository configuration, the\n\
                  index and the working tree. `submod remove <url>` unregisters\n\
                  a submodule from all four stores in one pass. See\n\
                  `submod <command> --help` for more information about a command."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Creates the repository if needed and initializes its submodules.
    Init,

    /// Registers a new submodule.
    Add(AddArgs),

    /// Unregisters a submodule from every store.
    Remove(RemoveArgs),

    /// Lists registered submodules as URL and path pairs.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
