//! Shell command surface
//!
//! Frontend events funnel through here: toolbar actions by identifier,
//! URL-bar submissions, tab strip interactions, bookmark dialog
//! interactions. Handlers return a `CommandResult` envelope carrying a
//! fresh `UiState` snapshot on success; errors are stringified, never
//! panicked.

use serde::Serialize;

use vetro_core::{Browser, ToolbarAction, WebEngine};

use crate::dialog::BookmarkDialog;
use crate::ui::{TabInfo, UiState};

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

pub struct Shell<E: WebEngine> {
    browser: Browser<E>,
    /// Pending confirmation message, consumed by the next snapshot
    status: Option<String>,
    /// Pending dialog-open request, consumed by the next snapshot
    dialog_requested: bool,
}

impl<E: WebEngine> Shell<E> {
    pub fn new(browser: Browser<E>) -> Self {
        Self {
            browser,
            status: None,
            dialog_requested: false,
        }
    }

    pub fn browser(&self) -> &Browser<E> {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut Browser<E> {
        &mut self.browser
    }

    /// Dispatch a toolbar action sent by identifier.
    pub fn dispatch_named(&mut self, action: &str) -> CommandResult<UiState> {
        match ToolbarAction::parse(action) {
            Some(action) => self.dispatch(action),
            None => CommandResult::err(format!("Unknown toolbar action: {action}")),
        }
    }

    /// Dispatch a toolbar action to the matching browser operation.
    pub fn dispatch(&mut self, action: ToolbarAction) -> CommandResult<UiState> {
        tracing::debug!(action = action.as_str(), "Dispatching toolbar action");

        match action {
            ToolbarAction::Back => self.browser.go_back(),
            ToolbarAction::Forward => self.browser.go_forward(),
            ToolbarAction::Reload => self.browser.reload(),
            ToolbarAction::Home => {
                if let Err(e) = self.browser.navigate_home() {
                    return CommandResult::err(e.to_string());
                }
            }
            ToolbarAction::NewTab => {
                self.browser.new_tab(None, None);
            }
            ToolbarAction::SaveBookmark => match self.browser.save_active_bookmark() {
                Ok(_) => self.status = Some("Bookmark saved.".to_string()),
                Err(e) => return CommandResult::err(e.to_string()),
            },
            ToolbarAction::ShowBookmarks => {
                // The snapshot flags the request; the frontend fetches
                // the dialog model through `open_bookmark_dialog`.
                self.dialog_requested = true;
            }
            ToolbarAction::NewIncognitoTab => {
                self.browser.new_incognito_tab();
            }
        }

        CommandResult::ok(self.ui_state())
    }

    /// Handle a URL-bar submission.
    pub fn submit_url(&mut self, text: &str) -> CommandResult<UiState> {
        self.browser.navigate(text);
        CommandResult::ok(self.ui_state())
    }

    /// Handle a close request from the tab strip. Closing the last tab
    /// is a no-op, mirrored back as a successful snapshot.
    pub fn close_tab(&mut self, index: usize) -> CommandResult<UiState> {
        self.browser.close_tab(index);
        CommandResult::ok(self.ui_state())
    }

    /// Handle a tab selection from the tab strip.
    pub fn select_tab(&mut self, index: usize) -> CommandResult<UiState> {
        match self.browser.activate_tab(index) {
            Ok(_) => CommandResult::ok(self.ui_state()),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }

    /// Open the bookmark management dialog with the stored list.
    pub fn open_bookmark_dialog(&mut self) -> CommandResult<BookmarkDialog> {
        match self.browser.bookmarks() {
            Ok(entries) => CommandResult::ok(BookmarkDialog::new(entries)),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }

    /// Open the selected dialog row in a new tab (double-click or the
    /// open button).
    pub fn open_bookmark_at(
        &mut self,
        dialog: &BookmarkDialog,
        index: usize,
    ) -> CommandResult<UiState> {
        match dialog.get(index) {
            Some(bookmark) => {
                self.browser.open_bookmark(&bookmark.url);
                CommandResult::ok(self.ui_state())
            }
            None => CommandResult::err(format!("No bookmark at index {index}")),
        }
    }

    /// Delete the selected dialog row and refresh the dialog from the
    /// store. Only the selected entry goes away, even when other
    /// entries share its URL.
    pub fn delete_bookmark_at(
        &mut self,
        dialog: &mut BookmarkDialog,
        index: usize,
    ) -> CommandResult<()> {
        match self.browser.remove_bookmark_at(index) {
            Ok(Some(removed)) => {
                self.status = Some("Bookmark deleted.".to_string());
                tracing::debug!(url = %removed.url, "Deleted bookmark");

                match self.browser.bookmarks() {
                    Ok(entries) => {
                        dialog.set_entries(entries);
                        CommandResult::ok(())
                    }
                    Err(e) => CommandResult::err(e.to_string()),
                }
            }
            Ok(None) => CommandResult::err(format!("No bookmark at index {index}")),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }

    /// Snapshot of everything the frontend draws. Takes the pending
    /// status message and dialog request, so each shows exactly once.
    pub fn ui_state(&mut self) -> UiState {
        let url_bar = self.browser.active_url();
        let window_title = self.browser.window_title();
        let active_tab = self.browser.active_index();

        let tabs = self
            .browser
            .tabs()
            .iter()
            .enumerate()
            .map(|(index, tab)| TabInfo::from_tab(tab, index == active_tab))
            .collect();

        UiState {
            url_bar,
            window_title,
            status: self.status.take().unwrap_or_default(),
            show_bookmarks: std::mem::take(&mut self.dialog_requested),
            tabs,
            active_tab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetro_core::{Config, HeadlessEngine};

    fn test_shell(dir: &std::path::Path) -> Shell<HeadlessEngine> {
        let browser = Browser::new(Config::rooted(dir), HeadlessEngine::new()).unwrap();
        Shell::new(browser)
    }

    #[test]
    fn test_submit_url_updates_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        let result = shell.submit_url("example.com");
        assert!(result.success);

        let state = result.data.unwrap();
        assert_eq!(state.url_bar, "http://example.com");
        assert_eq!(state.window_title, "Vetro - http://example.com");
        assert_eq!(state.tabs.len(), 1);
        assert!(state.tabs[0].is_active);
        assert!(state.status.is_empty());
        assert!(!state.show_bookmarks);
    }

    #[test]
    fn test_dispatch_named_rejects_unknown_action() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        let result = shell.dispatch_named("close-window");
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Unknown toolbar action"));
    }

    #[test]
    fn test_new_tab_and_incognito_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        let state = shell.dispatch_named("new-tab").data.unwrap();
        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.tabs[1].label, "New Tab");

        let state = shell.dispatch_named("new-incognito-tab").data.unwrap();
        assert_eq!(state.tabs.len(), 3);
        assert_eq!(state.active_tab, 2);
        assert!(state.tabs[2].incognito);
        assert_eq!(state.tabs[2].label, "Incognito");
    }

    #[test]
    fn test_home_dispatch_loads_home_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        shell.submit_url("example.com");
        let state = shell.dispatch(ToolbarAction::Home).data.unwrap();

        assert!(state.url_bar.starts_with("file:///"));
        assert!(state.url_bar.ends_with("homepage.html"));
    }

    #[test]
    fn test_back_dispatch_returns_to_previous_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        shell.submit_url("http://one.example");
        shell.submit_url("http://two.example");

        let state = shell.dispatch(ToolbarAction::Back).data.unwrap();
        assert_eq!(state.url_bar, "http://one.example");

        let state = shell.dispatch(ToolbarAction::Forward).data.unwrap();
        assert_eq!(state.url_bar, "http://two.example");
    }

    #[test]
    fn test_save_bookmark_confirms_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        shell.submit_url("http://example.com");
        let state = shell.dispatch(ToolbarAction::SaveBookmark).data.unwrap();
        assert_eq!(state.status, "Bookmark saved.");

        // The confirmation does not stick to later snapshots.
        assert!(shell.ui_state().status.is_empty());
    }

    #[test]
    fn test_close_tab_keeps_last_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        let state = shell.close_tab(0).data.unwrap();
        assert_eq!(state.tabs.len(), 1);
    }

    #[test]
    fn test_select_tab_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        assert!(!shell.select_tab(5).success);
    }

    #[test]
    fn test_show_bookmarks_requests_dialog_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        let state = shell.dispatch_named("show-bookmarks").data.unwrap();
        assert!(state.show_bookmarks);

        // The request rides along in exactly one snapshot.
        assert!(!shell.ui_state().show_bookmarks);
    }

    #[test]
    fn test_fresh_profile_shows_empty_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        let dialog = shell.open_bookmark_dialog().data.unwrap();
        assert!(dialog.is_empty());
        assert!(dialog.rows().is_empty());
    }

    #[test]
    fn test_dialog_delete_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        shell.submit_url("http://one.example");
        shell.dispatch(ToolbarAction::SaveBookmark);
        shell.submit_url("http://two.example");
        shell.dispatch(ToolbarAction::SaveBookmark);

        let mut dialog = shell.open_bookmark_dialog().data.unwrap();
        assert_eq!(
            dialog.rows(),
            vec![
                "one.example - http://one.example".to_string(),
                "two.example - http://two.example".to_string(),
            ]
        );

        let result = shell.delete_bookmark_at(&mut dialog, 0);
        assert!(result.success);
        assert_eq!(
            dialog.rows(),
            vec!["two.example - http://two.example".to_string()]
        );
        assert_eq!(shell.ui_state().status, "Bookmark deleted.");

        let result = shell.delete_bookmark_at(&mut dialog, 7);
        assert!(!result.success);
    }

    #[test]
    fn test_dialog_open_selected_spawns_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        shell.submit_url("http://example.com");
        shell.dispatch(ToolbarAction::SaveBookmark);

        let dialog = shell.open_bookmark_dialog().data.unwrap();
        let state = shell.open_bookmark_at(&dialog, 0).data.unwrap();

        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.tabs[1].label, "Bookmark");
        assert_eq!(state.url_bar, "http://example.com");

        assert!(!shell.open_bookmark_at(&dialog, 9).success);
    }

    #[test]
    fn test_snapshot_serializes_for_the_frontend() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = test_shell(dir.path());

        let state = shell.submit_url("http://example.com").data.unwrap();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["url_bar"], "http://example.com");
        assert_eq!(json["tabs"][0]["is_active"], true);
    }
}
