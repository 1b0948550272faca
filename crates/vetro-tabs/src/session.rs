//! Session: ordered tabs plus the active index
//!
//! Invariants: the tab list is never empty, and `active` always points
//! at a valid index. Construction requires an initial tab and `close`
//! refuses to remove the last one, so both hold for the lifetime of
//! the session.

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone)]
pub struct Session {
    tabs: Vec<Tab>,
    active: usize,
}

impl Session {
    pub fn new(initial: Tab) -> Self {
        Self {
            tabs: vec![initial],
            active: 0,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn active_tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn tab_by_id_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    /// Append a tab and make it active. Returns its index.
    pub fn push(&mut self, tab: Tab) -> usize {
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        self.active
    }

    /// Make the tab at `index` the active one.
    pub fn activate(&mut self, index: usize) -> Result<&Tab> {
        if index >= self.tabs.len() {
            return Err(TabError::IndexOutOfRange {
                index,
                len: self.tabs.len(),
            });
        }

        self.active = index;
        self.tabs[index].touch();

        let tab = &self.tabs[index];
        tracing::debug!(tab_id = %tab.id, index, "Activated tab");
        Ok(tab)
    }

    /// Close the tab at `index`.
    ///
    /// Closing the last remaining tab, or an out-of-range index, is a
    /// no-op and returns `None`. When the active tab is closed, the tab
    /// that now occupies its slot becomes active, clamped to the new
    /// last index.
    pub fn close(&mut self, index: usize) -> Option<Tab> {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            return None;
        }

        let closed = self.tabs.remove(index);

        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = index.min(self.tabs.len().saturating_sub(1));
            if let Some(tab) = self.tabs.get_mut(self.active) {
                tab.touch();
            }
        }

        tracing::debug!(tab_id = %closed.id, index, "Closed tab");
        Some(closed)
    }
}
