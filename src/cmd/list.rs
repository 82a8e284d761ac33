// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for submod.

use std::path::Path;

use crate::cli::submodule::ListArgs;
use crate::error::Result;
use crate::submodule::list::list_submodules;

/// Main handler for the list command.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or submodule
/// enumeration fails.
pub fn run_list_command(args: &ListArgs, top: &Path) -> Result<()> {
    let mapping = list_submodules(top)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&mapping)?);
        return Ok(());
    }

    if mapping.is_empty() {
        println!("No submodules registered");
    } else {
        for (url, path) in &mapping {
            println!("{url} {path}");
        }
    }
    Ok(())
}
