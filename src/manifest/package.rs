use crate::error::{BumpError, BumpResult};
use crate::types::version::Version;
use crate::utils::fs::{kind_of, read_json_object, write_json_document};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// The primary manifest (`package.json`), held in memory between read and write.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    doc: Map<String, Value>,
    version: Version,
    raw_version: String,
}

impl PackageManifest {
    /// Loads the manifest and parses its `version` field.
    pub fn load(path: &Path) -> BumpResult<Self> {
        let doc = read_json_object(path)?;
        let (raw_version, version) = version_field(path, &doc)?;
        Ok(PackageManifest {
            path: path.to_path_buf(),
            doc,
            version,
            raw_version,
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// The `version` string exactly as it appeared in the file.
    pub fn raw_version(&self) -> &str {
        &self.raw_version
    }

    /// Replaces `version` in place, leaving every other key where it was.
    pub fn set_version(&mut self, version: Version) {
        self.doc
            .insert("version".to_string(), Value::String(version.to_string()));
        self.version = version;
        self.raw_version = version.to_string();
    }

    /// Overwrites the manifest on disk.
    pub fn save(&self) -> BumpResult<()> {
        write_json_document(&self.path, &self.doc)
    }
}

/// Reads the `version` string of a manifest object, returning it alongside its parsed form.
fn version_field(path: &Path, doc: &Map<String, Value>) -> BumpResult<(String, Version)> {
    let raw = match doc.get("version") {
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(BumpError::schema(
                path,
                format!("'version' must be a string, found {}", kind_of(other)),
            ));
        }
        None => return Err(BumpError::schema(path, "missing 'version' field")),
    };
    let version = raw
        .parse::<Version>()
        .map_err(|reason| BumpError::schema(path, reason))?;
    Ok((raw.clone(), version))
}
