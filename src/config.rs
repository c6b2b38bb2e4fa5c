//! Client configuration read from page metadata.
//!
//! The server-rendered page may override defaults with
//! `<meta name="intel:..." content="...">` tags. Absent tags fall back to the
//! defaults the backend ships with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_RELOAD_DELAY_MS: u32 = 800;

pub const API_BASE_KEY: &str = "intel:api-base";
pub const CSRF_COOKIE_KEY: &str = "intel:csrf-cookie";
pub const RELOAD_DELAY_KEY: &str = "intel:reload-delay-ms";

/// Errors produced while building [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base is neither a root-relative path nor an absolute URL.
    #[error("invalid api base: {0:?}")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path, without a trailing slash.
    pub api_base: String,
    /// Name of the cookie holding the authenticity token.
    pub csrf_cookie: String,
    /// Delay between a success notice and the page reload.
    pub reload_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            reload_delay_ms: DEFAULT_RELOAD_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional keys:
    /// - `intel:api-base`: default `/api`
    /// - `intel:csrf-cookie`: default `csrftoken`
    /// - `intel:reload-delay-ms`: default 800, unparsable values use the default
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] when the API base is not a
    /// root-relative path or an `http(s)` URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = parse_api_base(lookup(API_BASE_KEY).as_deref())?;
        let csrf_cookie = lookup(CSRF_COOKIE_KEY)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_CSRF_COOKIE.to_owned());
        let reload_delay_ms = lookup(RELOAD_DELAY_KEY)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_RELOAD_DELAY_MS);

        Ok(Self { api_base, csrf_cookie, reload_delay_ms })
    }

    /// Read config from the current document's `<meta>` tags.
    ///
    /// Invalid values are logged and replaced by defaults so the edit modals
    /// still mount.
    pub fn from_document() -> Self {
        match Self::from_lookup(crate::util::browser::meta_content) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("client config rejected, using defaults: {e}");
                Self::default()
            }
        }
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_BASE.to_owned());
    };
    if !(raw.starts_with('/') || raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBase(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
