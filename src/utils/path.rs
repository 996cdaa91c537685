use std::{env, path::PathBuf};

pub const PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_LOCK_JSON: &str = "package-lock.json";
pub const CHANGELOG_MD: &str = "CHANGELOG.md";

/// Returns the current working directory.
pub fn get_cwd() -> Result<PathBuf, String> {
    env::current_dir().map_err(|e| format!("Failed to get current working directory: {}", e))
}

