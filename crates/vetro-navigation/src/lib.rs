//! Vetro Navigation
//!
//! Turns address-bar text into loadable URLs and names the toolbar
//! actions the shell dispatches on.

mod action;
mod input;

pub use action::ToolbarAction;
pub use input::resolve_input;
