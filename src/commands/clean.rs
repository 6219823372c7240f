//! Implementation of the `strata clean` command.
//!
//! Removes exactly the target directories recorded in the install manifest.
//! Missing directories are fine; removal failures are reported but do not
//! stop the remaining entries from being cleaned.

use crate::context::SyncContext;
use crate::error::Result;
use crate::fs::remove_tree;
use crate::manifest::Manifest;
use tracing::warn;

/// Execute the `strata clean` command.
pub fn cmd_clean(ctx: &SyncContext) -> Result<()> {
    let manifest_path = ctx.manifest_path();
    let mut manifest = Manifest::load(&manifest_path);

    if manifest.is_empty() {
        println!("Nothing to clean.");
        return Ok(());
    }

    let targets: Vec<String> = manifest.installed.keys().cloned().collect();
    let mut removed = 0usize;
    let mut first_error = None;

    for target in targets {
        let path = ctx.target_path(&target);
        match remove_tree(&path) {
            Ok(()) => {
                manifest.remove(&target);
                removed += 1;
                println!("  removed  {}", target);
            }
            Err(err) => {
                warn!("failed to remove '{}': {}", path.display(), err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    manifest.save(&manifest_path)?;

    println!("Cleaned {} layer(s).", removed);

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
