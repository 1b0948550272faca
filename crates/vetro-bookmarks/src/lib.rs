//! Vetro Bookmark Store
//!
//! Flat bookmark list persisted as a single JSON file. The store keeps
//! no in-memory state: every operation reads the file, mutates the
//! list, and writes it back in full.

mod bookmark;
mod error;
mod store;

pub use bookmark::Bookmark;
pub use error::BookmarkError;
pub use store::BookmarkStore;

pub type Result<T> = std::result::Result<T, BookmarkError>;
