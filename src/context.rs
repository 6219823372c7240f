//! Base-directory resolution for strata.
//!
//! Every operation receives an explicit base directory through `SyncContext`
//! instead of reading the process working directory ad hoc. The global
//! `--dir` flag selects it; without the flag it defaults to the invoking
//! directory.

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Result, StrataError};
use std::env;
use std::path::{Path, PathBuf};

/// File name of the install manifest, stored next to the configuration.
pub const MANIFEST_FILE_NAME: &str = ".strata-manifest.json";

/// Resolved paths for a sync run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Absolute path to the base directory layers are installed into.
    pub base_dir: PathBuf,
}

impl SyncContext {
    /// Resolve the context from an optional `--dir` override.
    ///
    /// Falls back to the current working directory when no override is given.
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        match dir {
            Some(dir) => Self::resolve_from(&dir),
            None => {
                let cwd = env::current_dir().map_err(|e| {
                    StrataError::UserError(format!(
                        "failed to get current working directory: {}",
                        e
                    ))
                })?;
                Self::resolve_from(&cwd)
            }
        }
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            return Err(StrataError::UserError(format!(
                "base directory does not exist: {}",
                dir.display()
            )));
        }

        let base_dir = dir.canonicalize().map_err(|e| {
            StrataError::UserError(format!(
                "failed to resolve base directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        Ok(Self { base_dir })
    }

    /// Path to the `layers.json` configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// Path to the install manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(MANIFEST_FILE_NAME)
    }

    /// Path a layer's target directory resolves to.
    pub fn target_path(&self, target: &str) -> PathBuf {
        self.base_dir.join(target)
    }
}
