//! Shared test fixtures.
//!
//! Builds throwaway git repositories usable as local clone sources and
//! writes layer configurations into sandbox directories.

use crate::config::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Create a local git repository usable as a clone source.
///
/// The repository contains a committed `src.txt`, plus `layers.json` and
/// `.github/` scaffold entries so stripping behavior is observable. Returns
/// the owning temp dir and the repository path; the path's final segment is
/// `name`, so it doubles as the expected clone target directory.
pub(crate) fn create_source_repo(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path().join(name);
    std::fs::create_dir_all(&repo).unwrap();

    git(&repo, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(&repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    // Configure git user for commits
    git(&repo, &["config", "user.email", "test@example.com"]);
    git(&repo, &["config", "user.name", "Test User"]);

    std::fs::write(repo.join("src.txt"), "layer content\n").unwrap();
    std::fs::write(repo.join("layers.json"), "{\"layers\":[]}\n").unwrap();
    std::fs::create_dir_all(repo.join(".github").join("workflows")).unwrap();
    std::fs::write(
        repo.join(".github").join("workflows").join("ci.yml"),
        "name: ci\n",
    )
    .unwrap();

    git(&repo, &["add", "."]);
    git(&repo, &["commit", "-m", "Initial commit"]);

    (temp_dir, repo)
}

/// Write a `layers.json` with the given name/url pairs into `dir`.
pub(crate) fn write_config(dir: &Path, layers: &[(&str, &str)]) {
    let entries: Vec<String> = layers
        .iter()
        .map(|(name, url)| format!("{{\"name\":\"{}\",\"url\":\"{}\"}}", name, url))
        .collect();
    let json = format!("{{\"layers\":[{}]}}", entries.join(","));
    std::fs::write(dir.join(CONFIG_FILE_NAME), json).unwrap();
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
