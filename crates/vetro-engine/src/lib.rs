//! Vetro Engine Interface
//!
//! The rendering engine is an opaque external dependency. This crate
//! defines the narrow surface the shell relies on (`WebEngine`,
//! `WebView`, `BrowsingProfile`) and a headless implementation that
//! honors the same semantics, so everything above it runs and tests
//! without a GUI toolkit.

mod headless;
mod profile;
mod view;

pub use headless::{HeadlessEngine, HeadlessView};
pub use profile::BrowsingProfile;
pub use view::{WebEngine, WebView};
