//! Main browser state container
//!
//! The `Browser` owns the session, one engine view per tab, and the
//! bookmark store. Views report URL changes through a queue that is
//! drained on the single UI thread before any state is read back out.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use vetro_bookmarks::{Bookmark, BookmarkStore};
use vetro_engine::{BrowsingProfile, WebEngine, WebView};
use vetro_navigation::resolve_input;
use vetro_tabs::{Session, Tab};

use crate::config::Config;
use crate::Result;

struct UrlChange {
    tab_id: String,
    url: String,
}

type UrlChangeQueue = Rc<RefCell<VecDeque<UrlChange>>>;

/// Main browser instance
///
/// All tab, navigation, and bookmark state flows through here. The
/// engine is purely a renderer behind the `WebEngine` trait.
pub struct Browser<E: WebEngine> {
    /// Configuration
    config: Config,
    /// Rendering engine handle
    engine: E,
    /// Ordered tabs plus the active index
    session: Session,
    /// One engine view per tab, keyed by tab id
    views: HashMap<String, E::View>,
    /// Bookmark store (stateless, file-backed)
    bookmarks: BookmarkStore,
    /// Profile shared by all regular tabs
    default_profile: BrowsingProfile,
    /// URL changes reported by views, drained on the UI thread
    url_events: UrlChangeQueue,
}

impl<E: WebEngine> Browser<E> {
    /// Initialize a new browser instance with a Home tab showing the
    /// configured home page.
    pub fn new(config: Config, engine: E) -> Result<Self> {
        let bookmarks = BookmarkStore::new(config.bookmarks_path.clone());
        let default_profile = BrowsingProfile::persistent(config.profile_dir.clone());
        let url_events: UrlChangeQueue = Rc::new(RefCell::new(VecDeque::new()));

        let home_url = config.home_url()?;
        let tab = Tab::new("Home", home_url.clone(), false);

        let mut view = engine.create_view(&default_profile);
        Self::wire_view(&url_events, &tab.id, &mut view);
        view.load(&home_url);

        let mut views = HashMap::new();
        views.insert(tab.id.clone(), view);

        let mut browser = Self {
            config,
            engine,
            session: Session::new(tab),
            views,
            bookmarks,
            default_profile,
            url_events,
        };

        browser.pump_engine_events();

        tracing::info!(home = %home_url, "Browser initialized");

        Ok(browser)
    }

    /// Install the URL-changed hook on a freshly created view.
    fn wire_view(events: &UrlChangeQueue, tab_id: &str, view: &mut E::View) {
        let events = Rc::clone(events);
        let tab_id = tab_id.to_string();

        view.connect_url_changed(Box::new(move |url| {
            events.borrow_mut().push_back(UrlChange {
                tab_id: tab_id.clone(),
                url: url.to_string(),
            });
        }));
    }

    fn spawn_tab(&mut self, url: String, label: String, incognito: bool) {
        // Incognito tabs each get their own fresh isolated profile.
        let profile = if incognito {
            BrowsingProfile::ephemeral()
        } else {
            self.default_profile.clone()
        };

        let tab = Tab::new(label, url.clone(), incognito);

        let mut view = self.engine.create_view(&profile);
        Self::wire_view(&self.url_events, &tab.id, &mut view);
        view.load(&url);

        tracing::info!(tab_id = %tab.id, url = %url, incognito, "Created tab");

        self.views.insert(tab.id.clone(), view);
        self.session.push(tab);
        self.pump_engine_events();
    }

    // === Tab operations ===

    /// Open a regular tab. Without a URL the configured default page
    /// loads; without a label the tab is called "New Tab".
    pub fn new_tab(&mut self, url: Option<&str>, label: Option<&str>) -> &Tab {
        let url = url
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_url.clone());
        let label = label.unwrap_or("New Tab");

        self.spawn_tab(url, label.to_string(), false);
        self.session.active_tab()
    }

    /// Open an incognito tab bound to its own isolated profile.
    pub fn new_incognito_tab(&mut self) -> &Tab {
        let url = self.config.default_url.clone();
        self.spawn_tab(url, "Incognito".to_string(), true);
        self.session.active_tab()
    }

    /// Open a bookmarked URL in a new tab.
    pub fn open_bookmark(&mut self, url: &str) -> &Tab {
        self.spawn_tab(url.to_string(), "Bookmark".to_string(), false);
        self.session.active_tab()
    }

    /// Close the tab at `index` and drop its view. Closing the last
    /// remaining tab is a no-op; returns whether a tab was closed.
    pub fn close_tab(&mut self, index: usize) -> bool {
        match self.session.close(index) {
            Some(closed) => {
                self.views.remove(&closed.id);
                true
            }
            None => false,
        }
    }

    pub fn activate_tab(&mut self, index: usize) -> Result<&Tab> {
        Ok(self.session.activate(index)?)
    }

    pub fn tabs(&self) -> &[Tab] {
        self.session.tabs()
    }

    pub fn active_index(&self) -> usize {
        self.session.active_index()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_view(&self) -> Option<&E::View> {
        self.views.get(&self.session.active_tab().id)
    }

    pub fn active_view_mut(&mut self) -> Option<&mut E::View> {
        let tab_id = self.session.active_tab().id.clone();
        self.views.get_mut(&tab_id)
    }

    // === Navigation operations ===

    /// Resolve address-bar text and load it into the active view.
    pub fn navigate(&mut self, input: &str) {
        let url = resolve_input(input);
        self.with_active_view(|view| view.load(&url));
    }

    /// Load the home page into the active view.
    pub fn navigate_home(&mut self) -> Result<()> {
        let url = self.config.home_url()?;
        self.with_active_view(|view| view.load(&url));
        Ok(())
    }

    pub fn go_back(&mut self) {
        self.with_active_view(|view| view.back());
    }

    pub fn go_forward(&mut self) {
        self.with_active_view(|view| view.forward());
    }

    pub fn reload(&mut self) {
        self.with_active_view(|view| view.reload());
    }

    fn with_active_view(&mut self, f: impl FnOnce(&mut E::View)) {
        let tab_id = self.session.active_tab().id.clone();
        if let Some(view) = self.views.get_mut(&tab_id) {
            f(view);
        }

        self.pump_engine_events();
    }

    // === Engine events ===

    /// Drain queued URL changes into the cached tab URLs.
    pub fn pump_engine_events(&mut self) {
        loop {
            let event = self.url_events.borrow_mut().pop_front();

            match event {
                Some(change) => {
                    if let Some(tab) = self.session.tab_by_id_mut(&change.tab_id) {
                        tab.set_url(change.url);
                    }
                }
                None => break,
            }
        }
    }

    // === Bookmark operations ===

    pub fn bookmarks(&self) -> Result<Vec<Bookmark>> {
        Ok(self.bookmarks.load()?)
    }

    /// Bookmark the page the active view currently shows.
    pub fn save_active_bookmark(&mut self) -> Result<Bookmark> {
        self.pump_engine_events();

        let active = self.session.active_tab();
        let (title, url) = match self.views.get(&active.id) {
            Some(view) => (view.current_title(), view.current_url()),
            None => (active.display_label().to_string(), active.url.clone()),
        };

        self.bookmarks.add(title.clone(), url.clone())?;

        tracing::info!(url = %url, "Saved bookmark");

        Ok(Bookmark::new(title, url))
    }

    /// Remove every bookmark with the given URL; returns the count.
    pub fn remove_bookmarks_by_url(&self, url: &str) -> Result<usize> {
        Ok(self.bookmarks.remove_by_url(url)?)
    }

    /// Remove exactly the bookmark at `index`, if any.
    pub fn remove_bookmark_at(&self, index: usize) -> Result<Option<Bookmark>> {
        Ok(self.bookmarks.remove_at(index)?)
    }

    pub fn bookmark_store(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    // === UI state ===

    /// URL shown in the address bar: the active view's current URL.
    pub fn active_url(&mut self) -> String {
        self.pump_engine_events();

        let active = self.session.active_tab();
        match self.views.get(&active.id) {
            Some(view) => view.current_url(),
            None => active.url.clone(),
        }
    }

    /// Window title: the configured base plus the active URL.
    pub fn window_title(&mut self) -> String {
        let url = self.active_url();
        format!("{} - {}", self.config.window_title, url)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetro_engine::HeadlessEngine;

    fn test_browser(dir: &std::path::Path) -> Browser<HeadlessEngine> {
        Browser::new(Config::rooted(dir), HeadlessEngine::new()).unwrap()
    }

    #[test]
    fn test_starts_with_home_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        assert_eq!(browser.tabs().len(), 1);
        assert_eq!(browser.tabs()[0].label, "Home");

        let url = browser.active_url();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("homepage.html"));
    }

    #[test]
    fn test_navigate_prefixes_bare_host() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        browser.navigate("example.com");
        assert_eq!(browser.active_url(), "http://example.com");
        assert_eq!(browser.tabs()[0].url, "http://example.com");

        browser.navigate("http://example.com/page");
        assert_eq!(browser.active_url(), "http://example.com/page");
    }

    #[test]
    fn test_new_tab_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        let tab = browser.new_tab(None, None);
        assert_eq!(tab.label, "New Tab");
        assert!(!tab.incognito);

        assert_eq!(browser.tabs().len(), 2);
        assert_eq!(browser.active_index(), 1);
        assert_eq!(browser.active_url(), "https://www.google.com");
    }

    #[test]
    fn test_close_tab_floor_of_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        assert!(!browser.close_tab(0));
        assert_eq!(browser.tabs().len(), 1);
    }

    #[test]
    fn test_close_tab_drops_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        browser.new_tab(Some("http://example.com"), None);
        assert_eq!(browser.tabs().len(), 2);

        assert!(browser.close_tab(1));
        assert_eq!(browser.tabs().len(), 1);
        assert_eq!(browser.active_index(), 0);
        assert!(browser.active_view().is_some());
    }

    #[test]
    fn test_back_and_forward_route_to_active_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        browser.navigate("http://one.example");
        browser.navigate("http://two.example");

        browser.go_back();
        assert_eq!(browser.active_url(), "http://one.example");

        browser.go_forward();
        assert_eq!(browser.active_url(), "http://two.example");

        browser.reload();
        assert_eq!(browser.active_url(), "http://two.example");
    }

    #[test]
    fn test_navigate_home_returns_to_home_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        browser.navigate("http://example.com");
        browser.navigate_home().unwrap();

        let url = browser.active_url();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("homepage.html"));
    }

    #[test]
    fn test_save_bookmark_uses_active_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        browser.navigate("http://example.com");
        let bookmark = browser.save_active_bookmark().unwrap();

        assert_eq!(bookmark.title, "example.com");
        assert_eq!(bookmark.url, "http://example.com");

        let stored = browser.bookmarks().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], bookmark);
        assert!(browser.config().bookmarks_path.exists());
    }

    #[test]
    fn test_open_bookmark_spawns_labeled_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        let tab = browser.open_bookmark("http://example.com");
        assert_eq!(tab.label, "Bookmark");
        assert!(!tab.incognito);

        assert_eq!(browser.tabs().len(), 2);
        assert_eq!(browser.active_url(), "http://example.com");
    }

    #[test]
    fn test_incognito_tab_keeps_disk_clean() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        // The Home tab uses the default profile, so the cache directory
        // exists already.
        let cache_dir = dir.path().join("profile").join("cache");
        let storage_dir = dir.path().join("profile").join("storage");
        let cached_before = cache_dir.read_dir().unwrap().count();

        let tab = browser.new_incognito_tab();
        assert_eq!(tab.label, "Incognito");
        assert!(tab.incognito);

        browser.navigate("http://secret.example");
        browser.active_view_mut().unwrap().set_cookie("sid", "s3cr3t");

        // Nothing from the incognito tab reached the default profile.
        assert_eq!(cache_dir.read_dir().unwrap().count(), cached_before);
        assert!(!storage_dir.join("cookies.txt").exists());

        // The same scenario on a regular tab persists both.
        browser.new_tab(Some("http://public.example"), None);
        browser.active_view_mut().unwrap().set_cookie("sid", "public");

        assert!(cache_dir.read_dir().unwrap().count() > cached_before);
        assert!(storage_dir.join("cookies.txt").exists());
    }

    #[test]
    fn test_window_title_tracks_active_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        browser.navigate("http://example.com");
        assert_eq!(browser.window_title(), "Vetro - http://example.com");

        browser.new_tab(Some("http://two.example"), None);
        assert_eq!(browser.window_title(), "Vetro - http://two.example");

        browser.activate_tab(0).unwrap();
        assert_eq!(browser.window_title(), "Vetro - http://example.com");
    }

    #[test]
    fn test_activate_tab_switches_url_bar() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = test_browser(dir.path());

        browser.new_tab(Some("http://example.com"), None);
        assert_eq!(browser.active_url(), "http://example.com");

        browser.activate_tab(0).unwrap();
        assert!(browser.active_url().ends_with("homepage.html"));

        assert!(browser.activate_tab(9).is_err());
    }
}
