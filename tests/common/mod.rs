//! Common test utilities for integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Environment variables that feed the layered loader
#[allow(dead_code)]
pub const OVERRIDE_VARS: [&str; 7] = [
    "COFFEE_ENV_PROFILE",
    "COFFEE_ENV_PRODUCTION",
    "COFFEE_ENV_API_SERVER_URL",
    "COFFEE_ENV_AUTH0__URL",
    "COFFEE_ENV_AUTH0__AUDIENCE",
    "COFFEE_ENV_AUTH0__CLIENT_ID",
    "COFFEE_ENV_AUTH0__CALLBACK_URL",
];

/// Create a temporary project root for test isolation
#[allow(dead_code)]
pub fn temp_project() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `.coffee/<name>` under `root`
#[allow(dead_code)]
pub fn write_override(root: &Path, name: &str, contents: &str) {
    let dir = root.join(".coffee");
    fs::create_dir_all(&dir).expect("Failed to create .coffee dir");
    fs::write(dir.join(name), contents).expect("Failed to write override file");
}

/// Run `f` with every loader variable unset
#[allow(dead_code)]
pub fn without_overrides<R>(f: impl FnOnce() -> R) -> R {
    let unset: Vec<(&str, Option<&str>)> = OVERRIDE_VARS.iter().map(|k| (*k, None)).collect();
    temp_env::with_vars(unset, f)
}
