mod runner;

use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Small export: two develop records (one draft), one legacy design record
/// and one other record
pub(crate) fn export() -> Value {
    json!([
        {
            "id": "1",
            "title": "Zeta Dashboard",
            "categories": ["develop"],
            "tags": ["react"],
            "status": "published",
            "priority": 1,
            "createdAt": "2024-03-01T09:00:00Z"
        },
        {
            "id": "2",
            "title": "Alpha Poster",
            "category": "design",
            "tags": ["print"],
            "status": "published",
            "priority": 3,
            "createdAt": "2023-05-01T09:00:00Z"
        },
        {
            "id": "3",
            "title": "Notebook",
            "categories": ["other"],
            "isOtherCategory": true,
            "status": "published",
            "priority": 2,
            "createdAt": "2022-01-10T09:00:00Z"
        },
        {
            "id": "4",
            "title": "Unfinished Game",
            "categories": ["develop"],
            "status": "draft",
            "createdAt": "2024-06-01T09:00:00Z"
        }
    ])
}

/// Write `contents` to an input file inside a fresh temp dir
pub(crate) fn write_input(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.json");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

pub(crate) fn write_export() -> (TempDir, PathBuf) {
    write_input(&export().to_string())
}

/// Ids of a JSON array of records, in order
pub(crate) fn ids(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .map(|records| records.iter().filter_map(|r| r["id"].as_str()).collect())
        .unwrap_or_default()
}
