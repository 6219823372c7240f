//! Layer configuration model for strata.
//!
//! Defines the `layers.json` schema: a single `layers` list of name + url
//! entries. Parsing is strict about the presence of the `layers` key and
//! non-empty fields, and deliberately loose about anything else (unknown
//! fields are ignored).

use crate::error::{Result, StrataError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the layer configuration, resolved against the base directory.
pub const CONFIG_FILE_NAME: &str = "layers.json";

/// A single layer entry: a named git repository to materialize locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Human-readable layer name used in logs and summaries.
    pub name: String,
    /// Git URL the layer is cloned from.
    pub url: String,
}

/// The parsed `layers.json` configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Layers to install, in declaration order.
    pub layers: Vec<Layer>,
}

impl LayerConfig {
    /// Load and validate the configuration from a file.
    ///
    /// A missing file is `ConfigNotFound`. A file that cannot be parsed,
    /// lacks the `layers` list, or contains a layer with an empty name or
    /// url is `ConfigMalformed`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StrataError::ConfigNotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(StrataError::UserError(format!(
                    "failed to read '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        Self::from_json(&contents).map_err(|reason| StrataError::ConfigMalformed {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse and validate a configuration from a JSON string.
    ///
    /// Returns a plain reason string; `load` attaches the path.
    fn from_json(contents: &str) -> std::result::Result<Self, String> {
        let config: LayerConfig = serde_json::from_str(contents).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parsed values: every layer needs a non-empty name and url.
    fn validate(&self) -> std::result::Result<(), String> {
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.name.trim().is_empty() {
                return Err(format!("layer at index {} has an empty name", index));
            }
            if layer.url.trim().is_empty() {
                return Err(format!("layer '{}' has an empty url", layer.name));
            }
        }
        Ok(())
    }
}
