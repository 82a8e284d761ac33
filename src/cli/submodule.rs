// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule command arguments.

use clap::Args;

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AddArgs {
    /// URL of the submodule repository to register.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Checkout path relative to the top-level project.
    /// Defaults to the repository name derived from the URL.
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Branch to track instead of the remote default.
    #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RemoveArgs {
    /// URL the submodule was registered with. When several entries share
    /// it, the last one in manifest order is removed.
    #[arg(value_name = "URL")]
    pub url: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints the mapping as JSON instead of plain lines.
    #[arg(long)]
    pub json: bool,
}
