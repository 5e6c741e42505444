#![allow(dead_code)]

use log::debug;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const MANIFEST: &str = "[package]\nname = \"aoc-testing\"\nversion = \"0.1.0\"\nedition = \"2021\"\n";

/// A scratch solutions directory with a manifest naming the package `aoc-testing`.
pub fn solutions_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();
    dir
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Every file under `root`, relative to it and sorted, manifest excluded.
pub fn generated_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .filter(|p| p != Path::new("Cargo.toml"))
        .collect();
    files.sort();
    files
}

pub fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}

/// Asserts that two directory trees hold the same files with the same content.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        debug!("Actual files:   {:?}", generated_files(actual));
        debug!("Expected files: {:?}", generated_files(expected));
    }
    assert!(!different, "{} differs from {}", actual.display(), expected.display());
}
