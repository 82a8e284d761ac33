// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule registration management.
//!
//! ```text
//! remove.rs  seven-step unregistration sequence
//! list.rs    manifest URL -> path mapping
//! init.rs    open-or-create + submodule index init
//! add.rs     delegated registration
//! ```
//!
//! The orchestrators compose the manifest and configuration stores with
//! the git backend; they are the only place multi-store logic lives.

pub mod add;
pub mod init;
pub mod list;
pub mod remove;
