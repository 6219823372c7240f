//! Layer sync runner.
//!
//! Installs every configured layer into the base directory: derive the
//! target directory, skip or force-replace existing installs, clone, strip
//! scaffold files, and aggregate per-layer outcomes into a report. Every
//! layer runs to completion; failures are collected instead of aborting the
//! batch, and the manifest is updated only after all installs settle.

use crate::config::Layer;
use crate::context::SyncContext;
use crate::error::{Result, StrataError};
use crate::fs::remove_tree;
use crate::git::clone_layer;
use crate::manifest::Manifest;
use crate::url::{format_authenticated_url, resolve_target_dir};
use std::path::Path;
use std::thread;
use tracing::{error, info, warn};

/// Environment variable holding the optional auth token injected into
/// clone URLs.
pub const AUTH_TOKEN_ENV: &str = "STRATA_AUTH_TOKEN";

/// Files removed from a fresh clone. A layer repository carries its own
/// layer config and CI scaffolding; neither belongs in the installed copy.
const SCAFFOLD_FILES: &[&str] = &["layers.json", ".github"];

/// Options controlling a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Remove an existing target directory and re-clone.
    pub force: bool,
    /// Install layers one at a time, in declaration order.
    pub sequential: bool,
    /// Auth token injected into clone URLs as userinfo.
    pub auth_token: Option<String>,
}

/// Outcome of a single layer install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The layer was cloned into its target directory.
    Installed { target: String },
    /// The target directory already existed and was left untouched.
    Skipped { target: String },
}

/// A failed layer install.
#[derive(Debug)]
pub struct LayerFailure {
    /// Name of the layer that failed.
    pub name: String,
    /// The error that aborted the install.
    pub error: StrataError,
}

/// Aggregate result of a sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Layers cloned this run, as (name, target) pairs.
    pub installed: Vec<(String, String)>,
    /// Layers skipped because their target already existed.
    pub skipped: Vec<(String, String)>,
    /// Layers that failed to install.
    pub failed: Vec<LayerFailure>,
}

impl SyncReport {
    /// True when no layer failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read the auth token from the environment. Empty values count as unset.
pub fn auth_token_from_env() -> Option<String> {
    std::env::var(AUTH_TOKEN_ENV)
        .ok()
        .filter(|token| !token.is_empty())
}

/// Install a single layer.
///
/// An existing target directory is skipped unless `force` is set, in which
/// case it is removed and re-cloned. Fresh clones have known scaffold files
/// stripped, best-effort.
pub fn install_layer(
    ctx: &SyncContext,
    layer: &Layer,
    opts: &SyncOptions,
) -> Result<InstallOutcome> {
    let target = resolve_target_dir(&layer.url)?;
    let target_path = ctx.target_path(&target);

    if target_path.exists() {
        if !opts.force {
            info!(
                "layer '{}' already installed at '{}', skipping",
                layer.name, target
            );
            return Ok(InstallOutcome::Skipped { target });
        }

        info!("removing existing '{}' for forced re-install", target);
        remove_tree(&target_path)?;
    }

    let clone_url = format_authenticated_url(&layer.url, opts.auth_token.as_deref())?;

    info!("cloning layer '{}' into '{}'", layer.name, target);
    clone_layer(&ctx.base_dir, &clone_url, &layer.url, &target)?;

    strip_scaffold(&target_path);

    Ok(InstallOutcome::Installed { target })
}

/// Remove known scaffold files from a fresh clone, best-effort.
fn strip_scaffold(target_path: &Path) {
    for name in SCAFFOLD_FILES {
        let path = target_path.join(name);
        if let Err(err) = remove_tree(&path) {
            warn!("failed to strip scaffold '{}': {}", path.display(), err);
        }
    }
}

/// Install every layer and aggregate the outcomes.
///
/// Runs one scoped thread per layer unless `sequential` is set. Successful
/// installs are recorded in the manifest after all layers settle; the
/// manifest keeps the configured URL, never the credentialed one.
pub fn sync_all(ctx: &SyncContext, layers: &[Layer], opts: &SyncOptions) -> Result<SyncReport> {
    let results: Vec<(String, Result<InstallOutcome>)> = if opts.sequential {
        layers
            .iter()
            .map(|layer| (layer.name.clone(), install_layer(ctx, layer, opts)))
            .collect()
    } else {
        thread::scope(|scope| {
            let handles: Vec<_> = layers
                .iter()
                .map(|layer| {
                    (
                        layer.name.clone(),
                        scope.spawn(move || install_layer(ctx, layer, opts)),
                    )
                })
                .collect();

            handles
                .into_iter()
                .map(|(name, handle)| {
                    let result = match handle.join() {
                        Ok(result) => result,
                        Err(_) => Err(StrataError::UserError(format!(
                            "install thread for layer '{}' panicked",
                            name
                        ))),
                    };
                    (name, result)
                })
                .collect()
        })
    };

    let mut report = SyncReport::default();
    let mut manifest = Manifest::load(ctx.manifest_path());
    let mut installed_any = false;

    for (layer, (name, result)) in layers.iter().zip(results) {
        match result {
            Ok(InstallOutcome::Installed { target }) => {
                manifest.record(&target, layer);
                installed_any = true;
                report.installed.push((name, target));
            }
            Ok(InstallOutcome::Skipped { target }) => {
                report.skipped.push((name, target));
            }
            Err(err) => {
                error!("layer '{}' failed: {}", name, err);
                report.failed.push(LayerFailure { name, error: err });
            }
        }
    }

    if installed_any {
        manifest.save(ctx.manifest_path())?;
    }

    Ok(report)
}
