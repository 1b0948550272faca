//! Dark theme palette
//!
//! Colors for the window and the chrome (toolbar, URL bar, status
//! bar), exported as named values and as CSS custom properties for
//! HTML-based frontends.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub window_bg: String,
    pub window_fg: String,
    pub chrome_bg: String,
    pub chrome_fg: String,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            window_bg: "#2b2b2b".to_string(),
            window_fg: "#f0f0f0".to_string(),
            chrome_bg: "#3c3c3c".to_string(),
            chrome_fg: "#ffffff".to_string(),
        }
    }

    /// CSS custom properties block for HTML frontends.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --window-bg: {};\n  --window-fg: {};\n  --chrome-bg: {};\n  --chrome-fg: {};\n}}\n",
            self.window_bg, self.window_fg, self.chrome_bg, self.chrome_fg
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
