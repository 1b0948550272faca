//! Vetro Tab Management
//!
//! Ordered tab collection with a single active tab. The session is
//! never empty: it starts with one tab and refuses to close the last
//! one.

mod error;
mod session;
mod tab;

pub use error::TabError;
pub use session::Session;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
