//! Golden datasets for the coursefeed scorer and comparison engine.
//!
//! Fixtures live next to this crate's manifest, so paths resolve the same way
//! from every crate that depends on it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Directory holding `golden/`, fixed at compile time.
pub fn fixtures_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path of a fixture given relative to [`fixtures_root`].
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture.
///
/// # Panics
/// On a missing or malformed file, naming the path. Only tests call this.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("cannot parse fixture {}: {e}", path.display()))
}

/// Untyped view of a fixture, for spot checks on shape.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).is_file()
}

/// `*.json` files directly under `subdir`, sorted by name. A missing directory yields none.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixture_path(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Path of a listed fixture relative to the fixtures root, for [`load_fixture`].
pub fn relative_to_root(path: &Path) -> String {
    path.strip_prefix(fixtures_root())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
