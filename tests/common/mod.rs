//! Shared fixture helpers for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Writes a fixture file under `dir`, creating parent directories as needed.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
