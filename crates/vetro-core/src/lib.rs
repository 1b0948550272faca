//! Vetro Core
//!
//! Central coordination layer for the Vetro browser shell. The
//! `Browser` owns the session, one engine view per tab, and the
//! bookmark store; the engine itself stays behind the `WebEngine`
//! trait.

mod browser;
mod config;
mod error;

pub use browser::Browser;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use vetro_bookmarks::{Bookmark, BookmarkError, BookmarkStore};
pub use vetro_engine::{BrowsingProfile, HeadlessEngine, HeadlessView, WebEngine, WebView};
pub use vetro_navigation::{resolve_input, ToolbarAction};
pub use vetro_tabs::{Session, Tab, TabError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
