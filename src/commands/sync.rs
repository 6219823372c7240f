//! Implementation of the `strata sync` command.
//!
//! Loads the configuration, installs every layer, prints a summary, and
//! fails with a sync error when any layer could not be installed.

use crate::cli::SyncArgs;
use crate::config::LayerConfig;
use crate::context::SyncContext;
use crate::error::{Result, StrataError};
use crate::sync::{SyncOptions, auth_token_from_env, sync_all};

/// Execute the `strata sync` command.
pub fn cmd_sync(ctx: &SyncContext, args: SyncArgs) -> Result<()> {
    let config = LayerConfig::load(ctx.config_path())?;

    if config.layers.is_empty() {
        println!("No layers configured in {}.", ctx.config_path().display());
        return Ok(());
    }

    let opts = SyncOptions {
        force: args.force,
        sequential: args.sequential,
        auth_token: auth_token_from_env(),
    };

    let total = config.layers.len();
    let report = sync_all(ctx, &config.layers, &opts)?;

    println!(
        "Synced {} layer(s): {} installed, {} skipped, {} failed.",
        total,
        report.installed.len(),
        report.skipped.len(),
        report.failed.len()
    );

    for (name, target) in &report.installed {
        println!("  installed  {} -> {}", name, target);
    }
    for (name, target) in &report.skipped {
        println!("  skipped    {} ({} already exists)", name, target);
    }
    for failure in &report.failed {
        println!("  failed     {}: {}", failure.name, failure.error);
    }

    if !report.is_success() {
        return Err(StrataError::SyncFailed {
            failed: report.failed.len(),
            total,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::{create_source_repo, write_config};
    use serial_test::serial;
    use tempfile::TempDir;

    fn sync_args() -> SyncArgs {
        SyncArgs {
            force: false,
            sequential: false,
        }
    }

    #[test]
    #[serial]
    fn sync_installs_configured_layers() {
        let (_src, repo) = create_source_repo("layer-a");
        let base = TempDir::new().unwrap();
        write_config(base.path(), &[("a", repo.to_str().unwrap())]);
        let ctx = SyncContext::resolve_from(base.path()).unwrap();

        cmd_sync(&ctx, sync_args()).unwrap();

        assert!(ctx.target_path("layer-a").join("src.txt").exists());
    }

    #[test]
    #[serial]
    fn missing_config_maps_to_config_failure() {
        let base = TempDir::new().unwrap();
        let ctx = SyncContext::resolve_from(base.path()).unwrap();

        let err = cmd_sync(&ctx, sync_args()).unwrap_err();

        assert!(matches!(err, StrataError::ConfigNotFound(_)));
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    #[serial]
    fn failed_layer_yields_sync_failed() {
        let base = TempDir::new().unwrap();
        let missing = base.path().join("no-such-repo");
        write_config(base.path(), &[("bad", missing.to_str().unwrap())]);
        let ctx = SyncContext::resolve_from(base.path()).unwrap();

        let err = cmd_sync(&ctx, sync_args()).unwrap_err();

        assert!(matches!(
            err,
            StrataError::SyncFailed {
                failed: 1,
                total: 1
            }
        ));
        assert_eq!(err.exit_code(), exit_codes::SYNC_FAILURE);
    }

    #[test]
    #[serial]
    fn empty_layer_list_is_a_no_op() {
        let base = TempDir::new().unwrap();
        write_config(base.path(), &[]);
        let ctx = SyncContext::resolve_from(base.path()).unwrap();

        cmd_sync(&ctx, sync_args()).unwrap();
    }
}
