use crate::error::{BumpError, BumpResult};
use crate::types::version::Version;
use crate::utils::fs::{kind_of, read_json_object, write_json_document};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Key of the root project's entry under `packages`.
const ROOT_PACKAGE: &str = "";

/// The lock manifest (`package-lock.json`). Carries the version twice:
/// at the top level and under `packages[""]`.
#[derive(Debug, Clone)]
pub struct LockManifest {
    path: PathBuf,
    doc: Map<String, Value>,
}

impl LockManifest {
    /// Loads the lock manifest and checks both version slots are present.
    pub fn load(path: &Path) -> BumpResult<Self> {
        let doc = read_json_object(path)?;
        if !doc.contains_key("version") {
            return Err(BumpError::schema(path, "missing top-level 'version' field"));
        }
        let root = root_package(path, &doc)?;
        if !root.contains_key("version") {
            return Err(BumpError::schema(path, "missing 'version' field in packages[\"\"]"));
        }
        Ok(LockManifest {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Writes the same version string into both slots.
    pub fn set_version(&mut self, version: Version) -> BumpResult<()> {
        let rendered = Value::String(version.to_string());
        self.doc.insert("version".to_string(), rendered.clone());

        let root = self
            .doc
            .get_mut("packages")
            .and_then(Value::as_object_mut)
            .and_then(|packages| packages.get_mut(ROOT_PACKAGE))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| BumpError::schema(&self.path, "missing packages[\"\"] entry"))?;
        root.insert("version".to_string(), rendered);
        Ok(())
    }

    /// Overwrites the lock manifest on disk.
    pub fn save(&self) -> BumpResult<()> {
        write_json_document(&self.path, &self.doc)
    }
}

fn root_package<'a>(
    path: &Path,
    doc: &'a Map<String, Value>,
) -> BumpResult<&'a Map<String, Value>> {
    let packages = match doc.get("packages") {
        Some(Value::Object(packages)) => packages,
        Some(other) => {
            return Err(BumpError::schema(
                path,
                format!("'packages' must be an object, found {}", kind_of(other)),
            ));
        }
        None => return Err(BumpError::schema(path, "missing 'packages' field")),
    };
    match packages.get(ROOT_PACKAGE) {
        Some(Value::Object(root)) => Ok(root),
        Some(other) => Err(BumpError::schema(
            path,
            format!("packages[\"\"] must be an object, found {}", kind_of(other)),
        )),
        None => Err(BumpError::schema(path, "missing packages[\"\"] entry")),
    }
}
