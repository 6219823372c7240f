//! CLI argument parsing for strata.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strata: declarative git layer sync.
///
/// Reads a `layers.json` list of layers (name + git URL) and materializes
/// each one by cloning it into the base directory.
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory containing layers.json; defaults to the current directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for strata.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install every configured layer.
    ///
    /// Clones each layer into its target directory. Existing targets are
    /// skipped unless --force is given.
    Sync(SyncArgs),

    /// Remove every layer recorded in the install manifest.
    ///
    /// Only directories this tool installed are touched; anything else in
    /// the base directory is left alone.
    Clean,

    /// Show each configured layer and its install state.
    List,

    /// Create a starter layers.json in the base directory.
    ///
    /// Refuses to overwrite an existing configuration.
    Init,
}

/// Arguments for the `sync` command.
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Remove existing target directories and re-clone them.
    #[arg(short, long)]
    pub force: bool,

    /// Install layers one at a time instead of in parallel.
    #[arg(long)]
    pub sequential: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
