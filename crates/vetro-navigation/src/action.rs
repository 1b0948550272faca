//! Toolbar action vocabulary
//!
//! Frontends send these identifiers when toolbar buttons are pressed;
//! the shell parses and dispatches them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarAction {
    Back,
    Forward,
    Reload,
    Home,
    NewTab,
    SaveBookmark,
    ShowBookmarks,
    NewIncognitoTab,
}

impl ToolbarAction {
    /// Every action, in toolbar order.
    pub const ALL: &'static [ToolbarAction] = &[
        ToolbarAction::Back,
        ToolbarAction::Forward,
        ToolbarAction::Reload,
        ToolbarAction::Home,
        ToolbarAction::NewTab,
        ToolbarAction::SaveBookmark,
        ToolbarAction::ShowBookmarks,
        ToolbarAction::NewIncognitoTab,
    ];

    /// Parse an action identifier
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "back" => Some(Self::Back),
            "forward" => Some(Self::Forward),
            "reload" => Some(Self::Reload),
            "home" => Some(Self::Home),
            "new-tab" => Some(Self::NewTab),
            "save-bookmark" => Some(Self::SaveBookmark),
            "show-bookmarks" => Some(Self::ShowBookmarks),
            "new-incognito-tab" => Some(Self::NewIncognitoTab),
            _ => None,
        }
    }

    /// The identifier for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Reload => "reload",
            Self::Home => "home",
            Self::NewTab => "new-tab",
            Self::SaveBookmark => "save-bookmark",
            Self::ShowBookmarks => "show-bookmarks",
            Self::NewIncognitoTab => "new-incognito-tab",
        }
    }
}
