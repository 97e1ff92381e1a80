//! Error types for skills-inkmon

use std::path::PathBuf;

/// Result type for skills-inkmon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that prevent a design document from being validated at all
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file is not valid JSON
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem error from skills-fs
    #[error(transparent)]
    Fs(#[from] skills_fs::Error),
}
