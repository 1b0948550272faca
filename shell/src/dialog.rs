//! Bookmark management dialog model
//!
//! Mirrors the modal dialog: a list of rows, open-in-new-tab and
//! delete acting on the selected row. The model holds the entries it
//! was opened with; deletions through the shell refresh it from the
//! store.

use serde::{Deserialize, Serialize};

use vetro_core::Bookmark;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkDialog {
    entries: Vec<Bookmark>,
}

impl BookmarkDialog {
    pub(crate) fn new(entries: Vec<Bookmark>) -> Self {
        Self { entries }
    }

    pub(crate) fn set_entries(&mut self, entries: Vec<Bookmark>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows as the dialog lists them: `"<title> - <url>"`.
    pub fn rows(&self) -> Vec<String> {
        self.entries.iter().map(Bookmark::display_row).collect()
    }
}
