// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Init | Add | Remove | List | Version
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;

use submod::cli::global::GlobalOptions;
use submod::cli::{self, Command};
use submod::cmd::add::run_add_command;
use submod::cmd::init::run_init_command;
use submod::cmd::list::run_list_command;
use submod::cmd::remove::run_remove_command;
use submod::logging::init_logging;
use submod::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    LogConfig::builder()
        .with_console_level(console_level)
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Init) => resolve_top(&cli.global).and_then(|top| run_init_command(&top)),
        Some(Command::Add(args)) => {
            resolve_top(&cli.global).and_then(|top| run_add_command(args, &top))
        }
        Some(Command::Remove(args)) => {
            resolve_top(&cli.global).and_then(|top| run_remove_command(args, &top))
        }
        Some(Command::List(args)) => {
            resolve_top(&cli.global).and_then(|top| run_list_command(args, &top))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn resolve_top(global: &GlobalOptions) -> submod::error::Result<PathBuf> {
    global
        .resolve_top()
        .context("failed to resolve the top-level project directory")
}
