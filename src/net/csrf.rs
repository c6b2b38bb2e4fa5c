//! Authenticity-token lookup for mutating requests.
//!
//! Resolution order: `<meta name="csrf-token">`, then the hidden
//! `csrfmiddlewaretoken` form input, then the token cookie. A page with none
//! of them yields an empty token; the backend rejects the request and the
//! failure surfaces like any other request error.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use crate::config::ClientConfig;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_META_NAME: &str = "csrf-token";
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Pick the first non-empty token source.
pub fn resolve_token(meta: Option<&str>, field: Option<&str>, cookies: &str, cookie_name: &str) -> String {
    meta.filter(|v| !v.is_empty())
        .or_else(|| field.filter(|v| !v.is_empty()))
        .or_else(|| cookie_value(cookies, cookie_name))
        .unwrap_or_default()
        .to_owned()
}

/// Extract a cookie value from a `document.cookie` style string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split("; ")
        .find_map(|row| row.strip_prefix(name)?.strip_prefix('='))
        .and_then(|rest| rest.split('=').next())
        .filter(|v| !v.is_empty())
}

/// Read the token from the current document.
pub fn read_token(config: &ClientConfig) -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return String::new();
        };
        let meta = document
            .query_selector(&format!("meta[name=\"{CSRF_META_NAME}\"]"))
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("content"));
        let field = document
            .query_selector(&format!("input[name=\"{CSRF_FIELD_NAME}\"]"))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value());
        let cookies = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default();

        let token = resolve_token(meta.as_deref(), field.as_deref(), &cookies, &config.csrf_cookie);
        if token.is_empty() {
            leptos::logging::warn!("CSRF token not found; sending request without it");
        }
        token
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        String::new()
    }
}
