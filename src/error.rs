// Counter source errors

use std::path::{Path, PathBuf};

/// Why a single counter read produced no value.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file or API could not be opened or queried.
    #[error("{} unavailable: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The source opened but its content did not have the expected shape.
    #[error("malformed data in {}: {detail}", path.display())]
    Malformed { path: PathBuf, detail: String },
}

impl SourceError {
    pub(crate) fn unavailable(path: &Path, source: std::io::Error) -> Self {
        SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(path: &Path, detail: impl Into<String>) -> Self {
        SourceError::Malformed {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }
}
