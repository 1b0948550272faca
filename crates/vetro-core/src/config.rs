//! Browser configuration
//!
//! Relative paths resolve against the process working directory at the
//! time they are used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bookmark file location
    pub bookmarks_path: PathBuf,
    /// Local home page document
    pub homepage_path: PathBuf,
    /// Root for the default profile's cache and storage
    pub profile_dir: PathBuf,
    /// Page loaded into fresh tabs
    pub default_url: String,
    /// Window title base; the active URL is appended after it
    pub window_title: String,
}

impl Config {
    /// Configuration with every path joined under `dir`.
    pub fn rooted(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            bookmarks_path: dir.join("bookmarks.json"),
            homepage_path: dir.join("homepage.html"),
            profile_dir: dir.join("profile"),
            ..Self::default()
        }
    }

    /// File URL of the home page document.
    ///
    /// The document does not have to exist; the URL is built from the
    /// absolute form of the configured path.
    pub fn home_url(&self) -> Result<String> {
        let path = if self.homepage_path.is_absolute() {
            self.homepage_path.clone()
        } else {
            std::env::current_dir()?.join(&self.homepage_path)
        };

        let url =
            Url::from_file_path(&path).map_err(|_| CoreError::HomePage(path.clone()))?;

        Ok(url.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bookmarks_path: PathBuf::from("bookmarks.json"),
            homepage_path: PathBuf::from("homepage.html"),
            profile_dir: PathBuf::from("profile"),
            default_url: "https://www.google.com".to_string(),
            window_title: "Vetro".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_are_relative() {
        let config = Config::default();
        assert_eq!(config.bookmarks_path, PathBuf::from("bookmarks.json"));
        assert_eq!(config.homepage_path, PathBuf::from("homepage.html"));
        assert_eq!(config.default_url, "https://www.google.com");
    }

    #[test]
    fn test_rooted_joins_paths() {
        let config = Config::rooted("/data/vetro");
        assert_eq!(
            config.bookmarks_path,
            PathBuf::from("/data/vetro/bookmarks.json")
        );
        assert_eq!(
            config.homepage_path,
            PathBuf::from("/data/vetro/homepage.html")
        );
        assert_eq!(config.profile_dir, PathBuf::from("/data/vetro/profile"));
        assert_eq!(config.window_title, "Vetro");
    }

    #[test]
    fn test_home_url_is_absolute_file_url() {
        let url = Config::default().home_url().unwrap();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("homepage.html"));
    }

    #[test]
    fn test_home_url_from_rooted_config() {
        let dir = tempfile::tempdir().unwrap();
        let url = Config::rooted(dir.path()).home_url().unwrap();
        assert!(url.starts_with("file:///"));
        assert!(url.contains("homepage.html"));
    }
}
