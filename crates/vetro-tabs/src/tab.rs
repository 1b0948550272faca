//! Tab data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: String,
    /// Label shown on the tab strip
    pub label: String,
    /// Last URL reported by the engine view; the view itself stays the
    /// source of truth
    pub url: String,
    /// Bound to an isolated browsing profile, fixed at creation
    pub incognito: bool,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last time the tab was displayed
    pub last_accessed_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(label: impl Into<String>, url: impl Into<String>, incognito: bool) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            url: url.into(),
            incognito,
            created_at: now,
            last_accessed_at: now,
        }
    }

    /// Mark the tab as displayed now
    pub fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }

    /// Record the URL the engine view reported
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Get display label (with fallback to URL)
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.url
        } else {
            &self.label
        }
    }
}
