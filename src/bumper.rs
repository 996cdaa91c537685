use crate::error::BumpResult;
use crate::manifest::{changelog, lock::LockManifest, package::PackageManifest};
use crate::types::config::BumpConfig;
use crate::types::version::Version;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::semver::compute_bump;

/// Advances the version across the manifest, the lock manifest and the changelog,
/// returning the version that was written.
///
/// Files are handled strictly in that order and each one is written before
/// the next is read. Nothing is rolled back: if the lock manifest is rejected,
/// the primary manifest has already been bumped on disk.
pub fn bump(config: &BumpConfig, logger: &Logger) -> BumpResult<Version> {
    let mut manifest = PackageManifest::load(&config.manifest_path)?;
    logger.log_message(LogLevel::Print, &format!("Current Version: {}", manifest.raw_version()));

    let bumped = compute_bump(manifest.version());
    manifest.set_version(bumped);
    manifest.save()?;

    let mut lock = LockManifest::load(&config.lock_path)?;
    lock.set_version(bumped)?;
    lock.save()?;

    changelog::append_release_note(&config.changelog_path, bumped, &config.release_url_base)?;

    logger.log_message(LogLevel::Print, &format!("Bumped Version: {}", bumped));

    Ok(bumped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BumpError;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn seed(root: &Path, version: &str) {
        fs::write(
            root.join("package.json"),
            format!(
                r#"{{"name": "lazyarmadev", "version": "{}", "publisher": "DartRuffian"}}"#,
                version
            ),
        )
        .unwrap();
        fs::write(
            root.join("package-lock.json"),
            format!(
                r#"{{"name": "lazyarmadev", "version": "{v}", "lockfileVersion": 3, "packages": {{"": {{"name": "lazyarmadev", "version": "{v}"}}}}}}"#,
                v = version
            ),
        )
        .unwrap();
        fs::write(root.join("CHANGELOG.md"), "# Change Log").unwrap();
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn bumps_all_three_files() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), "1.2.9");
        let config = BumpConfig::in_dir(dir.path());

        let bumped = bump(&config, &Logger::new()).unwrap();
        assert_eq!(bumped, Version::new(1, 3, 0));

        let manifest = read_json(&config.manifest_path);
        assert_eq!(manifest["version"], "1.3.0");
        assert_eq!(manifest["publisher"], "DartRuffian");

        let lock = read_json(&config.lock_path);
        assert_eq!(lock["version"], "1.3.0");
        assert_eq!(lock["packages"][""]["version"], "1.3.0");

        assert_eq!(
            fs::read_to_string(&config.changelog_path).unwrap(),
            "# Change Log\n\n## [Release 1.3.0]\nRead on [GitHub](https://github.com/DartRuffian/LazyArmaDev/releases/tag/v1.3.0)"
        );
    }

    #[test]
    fn second_bump_moves_on_from_the_first() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), "2.9.8");
        let config = BumpConfig::in_dir(dir.path());
        let logger = Logger::new();

        let first = bump(&config, &logger).unwrap();
        let second = bump(&config, &logger).unwrap();
        assert_eq!(first, Version::new(2, 9, 9));
        assert_eq!(second, Version::new(3, 0, 0));
        assert_ne!(first, second);
        assert_eq!(read_json(&config.lock_path)["version"], "3.0.0");
    }

    #[test]
    fn schema_error_in_manifest_touches_nothing() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), "1.0.0");
        let config = BumpConfig::in_dir(dir.path());
        fs::write(&config.manifest_path, r#"{"name": "lazyarmadev"}"#).unwrap();
        let lock_before = fs::read_to_string(&config.lock_path).unwrap();

        let err = bump(&config, &Logger::new()).unwrap_err();
        assert!(matches!(err, BumpError::Schema { .. }));
        assert_eq!(
            fs::read_to_string(&config.manifest_path).unwrap(),
            r#"{"name": "lazyarmadev"}"#
        );
        assert_eq!(fs::read_to_string(&config.lock_path).unwrap(), lock_before);
        assert_eq!(
            fs::read_to_string(&config.changelog_path).unwrap(),
            "# Change Log"
        );
    }

    #[test]
    fn lock_schema_error_leaves_manifest_already_bumped() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), "1.2.3");
        let config = BumpConfig::in_dir(dir.path());
        fs::write(&config.lock_path, r#"{"version": "1.2.3", "packages": {}}"#).unwrap();

        let err = bump(&config, &Logger::new()).unwrap_err();
        assert!(matches!(err, BumpError::Schema { .. }));
        assert_eq!(read_json(&config.manifest_path)["version"], "1.2.4");
        assert_eq!(
            fs::read_to_string(&config.lock_path).unwrap(),
            r#"{"version": "1.2.3", "packages": {}}"#
        );
        assert_eq!(
            fs::read_to_string(&config.changelog_path).unwrap(),
            "# Change Log"
        );
    }

    #[test]
    fn missing_lock_leaves_manifest_already_bumped() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), "3.4.9");
        let config = BumpConfig::in_dir(dir.path());
        fs::remove_file(&config.lock_path).unwrap();

        let err = bump(&config, &Logger::new()).unwrap_err();
        assert!(matches!(err, BumpError::FileNotFound { ref path } if path == &config.lock_path));
        assert_eq!(read_json(&config.manifest_path)["version"], "3.5.0");
        assert!(!config.lock_path.exists());
        assert_eq!(
            fs::read_to_string(&config.changelog_path).unwrap(),
            "# Change Log"
        );
    }

    #[test]
    fn missing_manifest_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let config = BumpConfig::in_dir(dir.path());
        assert!(matches!(
            bump(&config, &Logger::new()),
            Err(BumpError::FileNotFound { .. })
        ));
    }
}
