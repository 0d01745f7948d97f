//! Cookie access.
//!
//! Only reads are needed: the backend sets the CSRF cookie, the client
//! mirrors it into a header. Parsing is split out as a pure function so it is
//! testable without a DOM.

use thrive_shared::CSRF_COOKIE_NAME;
use wasm_bindgen::JsCast;

/// Extracts a cookie's value from a raw `document.cookie` string.
///
/// The cookie string is `name=value` pairs separated by `; `. Values are
/// returned verbatim; an empty value yields `Some("")` since the cookie does
/// exist.
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .map(|pair| pair.trim())
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('=').map(String::from))
}

fn document_cookies() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    html_document.cookie().ok()
}

/// The current CSRF token, if the backend has set its cookie.
///
/// Read fresh on every call; the token is never cached client-side.
pub fn csrf_token() -> Option<String> {
    cookie_value(&document_cookies()?, CSRF_COOKIE_NAME)
}

#[cfg(test)]
mod tests;
