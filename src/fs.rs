//! Filesystem helpers for strata.
//!
//! Atomic file writes (temp file + fsync + rename) and forced recursive
//! removal where absence is not an error.

use crate::error::{Result, StrataError};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write a file atomically.
///
/// Writes to a temp file in the destination directory, fsyncs, then renames
/// over the destination so readers never observe a partially written file.
pub fn atomic_write_file(path: &Path, contents: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        StrataError::UserError(format!("cannot write to root path: {}", path.display()))
    })?;

    fs::create_dir_all(parent).map_err(|e| {
        StrataError::UserError(format!(
            "failed to create directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StrataError::UserError(format!("invalid file path: {}", path.display())))?;
    let temp_path = parent.join(format!(".{}.tmp", file_name));

    let mut file = fs::File::create(&temp_path).map_err(|e| {
        StrataError::UserError(format!(
            "failed to create temp file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    file.write_all(contents.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StrataError::UserError(format!(
            "failed to write temp file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StrataError::UserError(format!(
            "failed to sync temp file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StrataError::UserError(format!(
            "failed to move temp file into place at '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Remove a file or directory tree. A missing path is not an error.
pub fn remove_tree(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(StrataError::UserError(format!(
                "failed to inspect '{}': {}",
                path.display(),
                e
            )));
        }
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    result.map_err(|e| {
        StrataError::UserError(format!("failed to remove '{}': {}", path.display(), e))
    })
}
