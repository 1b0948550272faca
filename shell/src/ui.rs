//! UI state snapshots

use serde::{Deserialize, Serialize};

use vetro_core::Tab;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub label: String,
    pub url: String,
    pub incognito: bool,
    pub is_active: bool,
}

impl TabInfo {
    pub fn from_tab(tab: &Tab, is_active: bool) -> Self {
        Self {
            id: tab.id.clone(),
            label: tab.display_label().to_string(),
            url: tab.url.clone(),
            incognito: tab.incognito,
            is_active,
        }
    }
}

/// Everything the frontend needs to redraw the chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiState {
    /// Address bar text
    pub url_bar: String,
    /// Window title
    pub window_title: String,
    /// Transient status line; empty when there is nothing to report
    pub status: String,
    /// One-shot request to open the bookmark dialog
    pub show_bookmarks: bool,
    /// Tab strip, in order
    pub tabs: Vec<TabInfo>,
    /// Index of the active tab
    pub active_tab: usize,
}
