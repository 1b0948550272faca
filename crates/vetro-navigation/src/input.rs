//! Input resolution for the address bar

use url::Url;

/// Schemes accepted from the address bar as-is.
const RECOGNIZED_SCHEMES: &[&str] = &["http", "https", "file", "about", "data"];

/// Resolve address-bar text into a loadable URL.
///
/// Text carrying a recognized scheme passes through unchanged; anything
/// else gets an `http://` prefix. No further validation happens here;
/// malformed input is the engine's to reject.
pub fn resolve_input(input: &str) -> String {
    let input = input.trim();

    if has_recognized_scheme(input) {
        return input.to_string();
    }

    format!("http://{}", input)
}

fn has_recognized_scheme(input: &str) -> bool {
    match Url::parse(input) {
        Ok(parsed) => RECOGNIZED_SCHEMES.contains(&parsed.scheme()),
        Err(_) => false,
    }
}
