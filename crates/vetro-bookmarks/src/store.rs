//! JSON-file bookmark store
//!
//! Stateless by design: the file on disk is the single source of truth.
//! Every operation loads the full list, applies its change, and
//! rewrites the file. Writes go through a temp file and rename so a
//! crash mid-save never corrupts the previous list.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::bookmark::Bookmark;
use crate::error::BookmarkError;
use crate::Result;

pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full bookmark list from disk.
    ///
    /// A missing file means no bookmarks were saved yet and loads as an
    /// empty list. A file that exists but does not parse is an error;
    /// the caller decides what to do with it.
    pub fn load(&self) -> Result<Vec<Bookmark>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BookmarkError::Io(e)),
        };

        serde_json::from_str(&data).map_err(|source| BookmarkError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file with the given list, atomically.
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(bookmarks).map_err(|source| {
            BookmarkError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(serialized.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            count = bookmarks.len(),
            path = %self.path.display(),
            "Saved bookmarks"
        );

        Ok(())
    }

    /// Append a bookmark and return the updated list.
    pub fn add(&self, title: impl Into<String>, url: impl Into<String>) -> Result<Vec<Bookmark>> {
        let mut bookmarks = self.load()?;
        bookmarks.push(Bookmark::new(title, url));
        self.save(&bookmarks)?;

        Ok(bookmarks)
    }

    /// Remove every bookmark with the given URL. Returns how many were
    /// removed.
    pub fn remove_by_url(&self, url: &str) -> Result<usize> {
        let mut bookmarks = self.load()?;
        let before = bookmarks.len();
        bookmarks.retain(|bookmark| bookmark.url != url);
        let removed = before - bookmarks.len();
        self.save(&bookmarks)?;

        if removed > 0 {
            tracing::debug!(url = %url, removed, "Removed bookmarks by URL");
        }

        Ok(removed)
    }

    /// Remove exactly the bookmark at `index`, if it exists.
    pub fn remove_at(&self, index: usize) -> Result<Option<Bookmark>> {
        let mut bookmarks = self.load()?;
        if index >= bookmarks.len() {
            return Ok(None);
        }

        let removed = bookmarks.remove(index);
        self.save(&bookmarks)?;

        tracing::debug!(url = %removed.url, index, "Removed bookmark at index");

        Ok(Some(removed))
    }
}
