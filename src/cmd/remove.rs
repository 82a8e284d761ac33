// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remove command implementation for submod.

use std::path::Path;

use crate::cli::submodule::RemoveArgs;
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::submodule::remove::remove_submodule;

/// Main handler for the remove command.
///
/// # Errors
///
/// Returns an error when no submodule matches the URL or a removal step
/// fails.
pub fn run_remove_command(args: &RemoveArgs, top: &Path) -> Result<()> {
    let backend = ShellBackend::new()?;
    let removed = remove_submodule(top, &args.url, &backend)?;
    println!("Removed submodule '{}' at {}", removed.name, removed.path);
    Ok(())
}
