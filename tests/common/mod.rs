#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a ROM directory with the given files and a keep.txt inside it
pub async fn create_rom_dir(files: &[&str], keep: &str) -> TempDir {
    let temp_dir = create_test_dir();
    for file in files {
        fs::write(temp_dir.path().join(file), format!("rom:{file}"))
            .await
            .expect("Should write rom");
    }
    fs::write(temp_dir.path().join("keep.txt"), keep)
        .await
        .expect("Should write keep file");
    temp_dir
}

/// Path of the keep.txt created by `create_rom_dir`
pub fn keep_file(dir: &Path) -> PathBuf {
    dir.join("keep.txt")
}

/// Recursive listing of every path under `dir` (relative), with file contents
pub fn snapshot(dir: &Path) -> BTreeSet<(String, Option<String>)> {
    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(dir)
                .expect("Should be under dir")
                .to_string_lossy()
                .to_string();
            let content = if entry.path().is_file() {
                std::fs::read_to_string(entry.path()).ok()
            } else {
                None
            };
            (relative, content)
        })
        .collect()
}
