use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can abort a bump. None of these are recovered from.
#[derive(Debug, Error)]
pub enum BumpError {
    #[error("{} not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: {reason}", .path.display())]
    Schema { path: PathBuf, reason: String },
}

impl BumpError {
    /// Maps an I/O failure on `path`, folding `NotFound` into `FileNotFound`.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            BumpError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BumpError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn schema(path: &Path, reason: impl Into<String>) -> Self {
        BumpError::Schema {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

pub type BumpResult<T> = Result<T, BumpError>;
