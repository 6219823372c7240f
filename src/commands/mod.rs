//! Command implementations for strata.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every handler receives the resolved base-directory
//! context instead of reading the working directory itself.

mod clean;
mod init;
mod list;
mod sync;

use crate::cli::{Cli, Command};
use crate::context::SyncContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The base directory
/// is resolved once, then each command is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = SyncContext::resolve(cli.dir)?;

    match cli.command {
        Command::Sync(args) => sync::cmd_sync(&ctx, args),
        Command::Clean => clean::cmd_clean(&ctx),
        Command::List => list::cmd_list(&ctx),
        Command::Init => init::cmd_init(&ctx),
    }
}
