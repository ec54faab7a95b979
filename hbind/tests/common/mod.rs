//! Shared helpers for the binding integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Absolute path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Reads an HTML or JSON fixture (e.g. `"login_form.html"`).
///
/// ## Panics
///
/// Panics if the fixture is missing or unreadable.
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}
