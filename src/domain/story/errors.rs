//! Story Context - Errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Failed to read story file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode story document: {0}")]
    Decode(#[from] serde_json::Error),
}
