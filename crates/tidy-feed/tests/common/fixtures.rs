//! Test fixture loading utilities

use std::path::PathBuf;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load an RSS fixture file as a string
pub fn load_rss_fixture(name: &str) -> String {
    let path = fixture_path(&format!("rss/{}", name));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", path.display()))
}
