//! Bookmark error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bookmark file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
