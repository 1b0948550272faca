//! Headless engine
//!
//! In-process `WebEngine` implementation. No rendering and no network:
//! a view tracks its own back/forward history, derives a page title
//! from the URL, and honors the profile's persistence settings by
//! writing cookie and cache files exactly when the profile provides
//! directories for them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use url::Url;

use crate::profile::BrowsingProfile;
use crate::view::{WebEngine, WebView};

#[derive(Debug, Default)]
pub struct HeadlessEngine;

impl HeadlessEngine {
    pub fn new() -> Self {
        Self
    }
}

impl WebEngine for HeadlessEngine {
    type View = HeadlessView;

    fn create_view(&self, profile: &BrowsingProfile) -> Self::View {
        HeadlessView::new(profile.clone())
    }
}

pub struct HeadlessView {
    profile: BrowsingProfile,
    back_stack: Vec<String>,
    current: Option<String>,
    forward_stack: Vec<String>,
    cookies: BTreeMap<String, String>,
    url_changed: Vec<Box<dyn FnMut(&str)>>,
}

impl HeadlessView {
    pub fn new(profile: BrowsingProfile) -> Self {
        Self {
            profile,
            back_stack: Vec::new(),
            current: None,
            forward_stack: Vec::new(),
            cookies: BTreeMap::new(),
            url_changed: Vec::new(),
        }
    }

    pub fn profile(&self) -> &BrowsingProfile {
        &self.profile
    }

    /// Set a cookie for the current site. Persisted to the profile's
    /// storage directory when the profile allows it.
    pub fn set_cookie(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());

        if self.profile.persistent_cookies {
            if let Some(dir) = self.profile.storage_dir.clone() {
                if let Err(e) = self.write_cookie_file(&dir) {
                    tracing::warn!(error = %e, "Failed to persist cookies");
                }
            }
        }
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    fn write_cookie_file(&self, dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;

        let mut contents = String::new();
        for (name, value) in &self.cookies {
            contents.push_str(name);
            contents.push('=');
            contents.push_str(value);
            contents.push('\n');
        }

        fs::write(dir.join("cookies.txt"), contents)
    }

    fn write_cache_entry(&self, url: &str) {
        if let Some(dir) = self.profile.cache_dir.clone() {
            if let Err(e) = try_write_cache_entry(&dir, url) {
                tracing::warn!(error = %e, "Failed to write cache entry");
            }
        }
    }

    fn notify_url_changed(&mut self) {
        let url = match self.current.clone() {
            Some(url) => url,
            None => return,
        };

        for callback in &mut self.url_changed {
            callback(&url);
        }
    }
}

impl WebView for HeadlessView {
    fn load(&mut self, url: &str) {
        if let Some(previous) = self.current.take() {
            self.back_stack.push(previous);
        }

        self.current = Some(url.to_string());
        self.forward_stack.clear();

        tracing::debug!(url = %url, "Headless view loaded URL");

        self.write_cache_entry(url);
        self.notify_url_changed();
    }

    fn back(&mut self) {
        if let Some(previous) = self.back_stack.pop() {
            if let Some(current) = self.current.take() {
                self.forward_stack.push(current);
            }

            self.current = Some(previous);
            self.notify_url_changed();
        }
    }

    fn forward(&mut self) {
        if let Some(next) = self.forward_stack.pop() {
            if let Some(current) = self.current.take() {
                self.back_stack.push(current);
            }

            self.current = Some(next);
            self.notify_url_changed();
        }
    }

    fn reload(&mut self) {
        if let Some(url) = self.current.clone() {
            self.write_cache_entry(&url);
            self.notify_url_changed();
        }
    }

    fn current_url(&self) -> String {
        self.current
            .clone()
            .unwrap_or_else(|| "about:blank".to_string())
    }

    fn current_title(&self) -> String {
        derive_title(&self.current_url())
    }

    fn connect_url_changed(&mut self, callback: Box<dyn FnMut(&str)>) {
        self.url_changed.push(callback);
    }
}

fn try_write_cache_entry(dir: &Path, url: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(cache_file_name(url)), url)
}

fn cache_file_name(url: &str) -> String {
    url.chars()
        .take(120)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Stand-in for a real page title: host for network URLs, file name for
/// local files, the URL itself otherwise.
fn derive_title(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }

        if let Some(segment) = parsed.path_segments().and_then(|mut s| s.next_back()) {
            if !segment.is_empty() {
                return segment.to_string();
            }
        }
    }

    url.to_string()
}
