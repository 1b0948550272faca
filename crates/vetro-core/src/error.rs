//! Core error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Bookmark error: {0}")]
    Bookmark(#[from] vetro_bookmarks::BookmarkError),

    #[error("Tab error: {0}")]
    Tab(#[from] vetro_tabs::TabError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Home page path does not form a file URL: {}", .0.display())]
    HomePage(PathBuf),
}
