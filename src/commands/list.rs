//! Implementation of the `strata list` command.
//!
//! Shows each configured layer with its derived target directory and install
//! state, cross-checked against the install manifest.

use crate::config::LayerConfig;
use crate::context::SyncContext;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::url::resolve_target_dir;

/// Execute the `strata list` command.
pub fn cmd_list(ctx: &SyncContext) -> Result<()> {
    let config = LayerConfig::load(ctx.config_path())?;
    let manifest = Manifest::load(ctx.manifest_path());

    if config.layers.is_empty() {
        println!("No layers configured.");
        return Ok(());
    }

    println!("Layers in {}:", ctx.base_dir.display());

    for layer in &config.layers {
        match resolve_target_dir(&layer.url) {
            Ok(target) => {
                let state = layer_state(ctx, &manifest, &target);
                println!("  {:<24} {} [{}]", layer.name, target, state);
            }
            Err(err) => {
                println!("  {:<24} invalid url: {}", layer.name, err);
            }
        }
    }

    Ok(())
}

/// Describe the install state of a target directory.
fn layer_state(ctx: &SyncContext, manifest: &Manifest, target: &str) -> &'static str {
    let exists = ctx.target_path(target).exists();
    let recorded = manifest.installed.contains_key(target);

    match (exists, recorded) {
        (true, true) => "installed",
        (true, false) => "present, not recorded",
        (false, true) => "missing, recorded",
        (false, false) => "not installed",
    }
}
