//! Engine interface traits

use crate::profile::BrowsingProfile;

/// Interface to the web engine implementation.
pub trait WebEngine {
    type View: WebView;

    /// Creates a new view bound to the given browsing profile.
    fn create_view(&self, profile: &BrowsingProfile) -> Self::View;
}

/// A single engine view, hosting one page at a time.
pub trait WebView {
    /// Loads a URL into the view.
    fn load(&mut self, url: &str);

    /// Goes back one entry in the view's history, if possible.
    fn back(&mut self);

    /// Goes forward one entry in the view's history, if possible.
    fn forward(&mut self);

    /// Reloads the current page.
    fn reload(&mut self);

    /// The URL the view currently shows.
    fn current_url(&self) -> String;

    /// The title of the current page.
    fn current_title(&self) -> String;

    /// Registers a callback fired on every URL change.
    fn connect_url_changed(&mut self, callback: Box<dyn FnMut(&str)>);
}
