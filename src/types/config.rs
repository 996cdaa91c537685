use crate::utils::path::{CHANGELOG_MD, PACKAGE_JSON, PACKAGE_LOCK_JSON};
use std::path::{Path, PathBuf};

/// Prefix of the release page link written into the changelog; the version is appended.
pub const RELEASE_URL_BASE: &str = "https://github.com/DartRuffian/LazyArmaDev/releases/tag/v";

/// Where a bump reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    pub manifest_path: PathBuf,
    pub lock_path: PathBuf,
    pub changelog_path: PathBuf,
    pub release_url_base: String,
}

impl BumpConfig {
    /// The fixed file names resolved against `root`.
    pub fn in_dir(root: &Path) -> Self {
        BumpConfig {
            manifest_path: root.join(PACKAGE_JSON),
            lock_path: root.join(PACKAGE_LOCK_JSON),
            changelog_path: root.join(CHANGELOG_MD),
            release_url_base: RELEASE_URL_BASE.to_string(),
        }
    }
}
