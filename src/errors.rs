//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal error conditions. Anything recoverable (missing source directory,
/// post-write validation issues) is reported through the logger instead.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("No config file found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Config file {} is not valid JSON: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} exists! Specify -o to overwrite", path.display())]
    ProjectExists { path: PathBuf },

    #[error("Can't find Sublime binary: {}", path.display())]
    BinaryNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize project document: {0}")]
    Serialize(#[from] serde_json::Error),
}
