//! Browsing profiles
//!
//! A profile decides what a view persists. The default profile keeps
//! cookies, cache, and storage under a directory; the ephemeral profile
//! keeps everything in memory and drops it with the view.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowsingProfile {
    /// Cookies survive the view
    pub persistent_cookies: bool,
    /// On-disk HTTP cache location; none disables the disk cache
    pub cache_dir: Option<PathBuf>,
    /// On-disk storage location (cookies, local storage); none keeps
    /// state in memory only
    pub storage_dir: Option<PathBuf>,
}

impl BrowsingProfile {
    /// Default profile rooted under the given directory.
    pub fn persistent(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();

        Self {
            persistent_cookies: true,
            cache_dir: Some(dir.join("cache")),
            storage_dir: Some(dir.join("storage")),
        }
    }

    /// Isolated profile for incognito tabs: no persistent cookies, no
    /// cache path, no storage path.
    pub fn ephemeral() -> Self {
        Self {
            persistent_cookies: false,
            cache_dir: None,
            storage_dir: None,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        !self.persistent_cookies && self.cache_dir.is_none() && self.storage_dir.is_none()
    }
}
