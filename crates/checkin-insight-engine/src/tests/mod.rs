//! Shared helpers for engine tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_reports_dir() -> TempDir {
    TempDir::new().expect("failed to create temp reports dir")
}

pub fn create_test_report(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    fs::write(&path, content).expect("failed to write test report");
    path
}
