//! `document.cookie` backed token store.

use wasm_bindgen::JsCast;

use warden_auth::TokenStore;

use crate::cookie;

/// Persists the session token in a browser cookie so a reload can restore
/// the session. Failures degrade to an in-memory session.
pub struct BrowserCookieStore;

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into().ok()
}

impl TokenStore for BrowserCookieStore {
    fn save(&self, token: &str) {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&cookie::set_cookie(token));
        }
    }

    fn load(&self) -> Option<String> {
        let header = html_document()?.cookie().ok()?;
        cookie::read_cookie(&header)
    }

    fn clear(&self) {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&cookie::clear_cookie());
        }
    }
}
