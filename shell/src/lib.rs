//! Vetro Browser Shell
//!
//! Frontend-facing layer: typed commands in, typed UI state out. A
//! windowing frontend (Qt, GTK, Tauri) renders the snapshots and feeds
//! user events back through the `Shell`; nothing here depends on a
//! widget toolkit.

mod commands;
mod dialog;
mod theme;
mod ui;

pub use commands::{CommandResult, Shell};
pub use dialog::BookmarkDialog;
pub use theme::Theme;
pub use ui::{TabInfo, UiState};
