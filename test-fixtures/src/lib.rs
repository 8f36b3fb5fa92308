//! Fixture loader for Shafer golden datasets.
//!
//! Provides typed deserialization of fixture JSON files and helpers for
//! loading them from tests in any crate of the workspace.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.join("golden").exists() {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Relative paths of every golden scenario in the catalogue.
pub fn scenario_fixtures() -> Vec<String> {
    list_fixtures("golden/scenarios")
        .into_iter()
        .filter_map(|p| {
            p.file_name()
                .map(|name| format!("golden/scenarios/{}", name.to_string_lossy()))
        })
        .collect()
}
