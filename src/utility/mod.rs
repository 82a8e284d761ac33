// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   write_file()   overwrite, mode 0644 on Unix
//!   remove_tree()  recursive delete, absent target ok
//! ```

pub mod fs;
