// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          init / add / remove / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         submodule         |
//!              |  multi-store orchestrator |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             manifest    gitconfig   git
//!            .gitmodules  .git/config gix + CLI
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod error;
pub mod git;
pub mod gitconfig;
pub mod logging;
pub mod manifest;
pub mod submodule;
pub mod utility;
