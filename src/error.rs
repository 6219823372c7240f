//! Error types for the strata CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for strata operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum StrataError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file exists but could not be parsed or is invalid.
    #[error("malformed configuration in {path}: {reason}", path = .path.display())]
    ConfigMalformed { path: PathBuf, reason: String },

    /// A layer URL could not be interpreted.
    #[error("invalid layer URL '{url}': {reason}")]
    InvalidUrlFormat { url: String, reason: String },

    /// A git clone failed.
    #[error("clone failed for '{url}': {reason}")]
    CloneFailed { url: String, reason: String },

    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// One or more layers failed to install.
    #[error("{failed} of {total} layer(s) failed to sync")]
    SyncFailed { failed: usize, total: usize },
}

impl StrataError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StrataError::ConfigNotFound(_) => exit_codes::CONFIG_FAILURE,
            StrataError::ConfigMalformed { .. } => exit_codes::CONFIG_FAILURE,
            StrataError::InvalidUrlFormat { .. } => exit_codes::USER_ERROR,
            StrataError::UserError(_) => exit_codes::USER_ERROR,
            StrataError::CloneFailed { .. } => exit_codes::SYNC_FAILURE,
            StrataError::SyncFailed { .. } => exit_codes::SYNC_FAILURE,
        }
    }
}

/// Result type alias for strata operations.
pub type Result<T> = std::result::Result<T, StrataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_have_config_exit_code() {
        let err = StrataError::ConfigNotFound(PathBuf::from("/tmp/layers.json"));
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);

        let err = StrataError::ConfigMalformed {
            path: PathBuf::from("/tmp/layers.json"),
            reason: "missing field `layers`".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn invalid_url_has_user_exit_code() {
        let err = StrataError::InvalidUrlFormat {
            url: "not-a-valid-url".to_string(),
            reason: "expected a scheme separator ('://')".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn user_error_has_user_exit_code() {
        let err = StrataError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn clone_failed_has_sync_exit_code() {
        let err = StrataError::CloneFailed {
            url: "https://example.com/org/repo.git".to_string(),
            reason: "git exited with code 128".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::SYNC_FAILURE);
    }

    #[test]
    fn sync_failed_has_sync_exit_code() {
        let err = StrataError::SyncFailed {
            failed: 1,
            total: 3,
        };
        assert_eq!(err.exit_code(), exit_codes::SYNC_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = StrataError::ConfigNotFound(PathBuf::from("/work/layers.json"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /work/layers.json"
        );

        let err = StrataError::SyncFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 layer(s) failed to sync");
    }
}
