//! Implementation of the `strata init` command.
//!
//! Scaffolds a starter `layers.json` in the base directory. Never overwrites
//! an existing configuration.

use crate::config::{Layer, LayerConfig};
use crate::context::SyncContext;
use crate::error::{Result, StrataError};
use crate::fs::atomic_write_file;

/// Execute the `strata init` command.
pub fn cmd_init(ctx: &SyncContext) -> Result<()> {
    let config_path = ctx.config_path();

    if config_path.exists() {
        return Err(StrataError::UserError(format!(
            "configuration already exists: {}\n\n\
             Edit it directly, or remove it before running init again.",
            config_path.display()
        )));
    }

    let starter = LayerConfig {
        layers: vec![Layer {
            name: "example".to_string(),
            url: "https://example.com/org/example-layer.git".to_string(),
        }],
    };

    let json = serde_json::to_string_pretty(&starter).map_err(|e| {
        StrataError::UserError(format!("failed to serialize starter config: {}", e))
    })?;

    atomic_write_file(&config_path, &format!("{}\n", json))?;

    println!("Created {}.", config_path.display());
    println!("Edit the layer list, then run `strata sync` to install.");

    Ok(())
}
