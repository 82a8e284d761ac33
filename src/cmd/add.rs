// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Add command implementation for submod.

use std::path::Path;

use crate::cli::submodule::AddArgs;
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::submodule::add::add_submodule;

/// Main handler for the add command.
///
/// # Errors
///
/// Returns an error if the underlying submodule-add invocation fails.
pub fn run_add_command(args: &AddArgs, top: &Path) -> Result<()> {
    let backend = ShellBackend::new()?;
    add_submodule(
        top,
        &args.url,
        args.target.as_deref(),
        args.branch.as_deref(),
        &backend,
    )?;
    println!("Registered submodule from {}", args.url);
    Ok(())
}
