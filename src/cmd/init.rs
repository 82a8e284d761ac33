// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command implementation for submod.

use std::path::Path;

use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::submodule::init::init_repository;

/// Main handler for the init command.
///
/// # Errors
///
/// Returns an error if the repository cannot be created or submodule
/// initialization fails.
pub fn run_init_command(top: &Path) -> Result<()> {
    let backend = ShellBackend::new()?;
    init_repository(top, &backend)?;
    println!("Initialized repository at {}", top.display());
    Ok(())
}
