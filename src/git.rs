//! Git subprocess runner for strata.
//!
//! A thin wrapper around the `git` executable with captured stdout/stderr
//! and structured error handling. All git invocations go through this module.

use crate::error::{Result, StrataError};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Captured output of a git command.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command in the given working directory.
///
/// Spawn failures and non-zero exits are reported as a plain reason string;
/// callers attach the layer context to the error.
pub(crate) fn run_git(cwd: &Path, args: &[&str]) -> std::result::Result<GitOutput, String> {
    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| format!("failed to execute git: {} (is git installed?)", e))?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        return Ok(git_output);
    }

    let exit_code = output.status.code().unwrap_or(-1);
    let detail = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    Err(format!("git exited with code {}: {}", exit_code, detail))
}

/// Clone a layer repository into `target` under `base_dir`.
///
/// `clone_url` may carry embedded credentials; `display_url` is the
/// configured URL and is the only form allowed in errors. Any occurrence of
/// the credentialed URL echoed back by git is replaced before the error
/// surfaces.
pub fn clone_layer(base_dir: &Path, clone_url: &str, display_url: &str, target: &str) -> Result<()> {
    debug!("git clone '{}' -> '{}'", display_url, target);

    run_git(base_dir, &["clone", clone_url, target]).map_err(|reason| {
        StrataError::CloneFailed {
            url: display_url.to_string(),
            reason: reason.replace(clone_url, display_url),
        }
    })?;

    Ok(())
}
