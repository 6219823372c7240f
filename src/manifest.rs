//! Install manifest for strata.
//!
//! Records which target directories were installed by previous runs so that
//! `clean` removes exactly those directories and nothing else. Stored as
//! JSON next to the configuration and written atomically.

use crate::config::Layer;
use crate::error::{Result, StrataError};
use crate::fs::atomic_write_file;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// A single installed layer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledLayer {
    /// Layer name from the configuration.
    pub name: String,
    /// Configured URL, never the credentialed form.
    pub url: String,
    /// When the layer was installed.
    pub installed_at: DateTime<Utc>,
    /// Who installed it, as `user@host`.
    pub installed_by: String,
}

/// The persisted install manifest, keyed by target directory name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Installed layers keyed by their target directory.
    #[serde(default)]
    pub installed: BTreeMap<String, InstalledLayer>,
}

impl Manifest {
    /// Load the manifest from a file.
    ///
    /// An absent file yields an empty manifest. An unreadable or corrupt
    /// manifest logs a warning and also yields an empty manifest so that
    /// cleanup stays best-effort.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("failed to read manifest '{}': {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("ignoring corrupt manifest '{}': {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save the manifest atomically.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StrataError::UserError(format!("failed to serialize manifest: {}", e)))?;
        atomic_write_file(path.as_ref(), &json)
    }

    /// Record a freshly installed layer under its target directory.
    pub fn record(&mut self, target: &str, layer: &Layer) {
        self.installed.insert(
            target.to_string(),
            InstalledLayer {
                name: layer.name.clone(),
                url: layer.url.clone(),
                installed_at: Utc::now(),
                installed_by: actor_string(),
            },
        );
    }

    /// Remove a target directory's record. Unknown targets are ignored.
    pub fn remove(&mut self, target: &str) {
        self.installed.remove(target);
    }

    /// Whether the manifest records any installed layers.
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }
}

/// Build a `user@host` actor string for manifest records.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown-host".to_string());

    format!("{}@{}", user, host)
}
