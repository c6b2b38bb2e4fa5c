use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.csrf_cookie, "csrftoken");
    assert_eq!(config.reload_delay_ms, 800);
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let config = ClientConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "/intel/api/")])).unwrap();
    assert_eq!(config.api_base, "/intel/api");
}

#[test]
fn absolute_api_base_is_accepted() {
    let config = ClientConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "https://doj.example/api")])).unwrap();
    assert_eq!(config.api_base, "https://doj.example/api");
}

#[test]
fn relative_api_base_is_rejected() {
    let err = ClientConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "api")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiBase("api".to_owned()));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "  "), (CSRF_COOKIE_KEY, "")])).unwrap();
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.csrf_cookie, DEFAULT_CSRF_COOKIE);
}

#[test]
fn reload_delay_parses_or_defaults() {
    let config = ClientConfig::from_lookup(lookup_from(&[(RELOAD_DELAY_KEY, " 250 ")])).unwrap();
    assert_eq!(config.reload_delay_ms, 250);

    let config = ClientConfig::from_lookup(lookup_from(&[(RELOAD_DELAY_KEY, "soon")])).unwrap();
    assert_eq!(config.reload_delay_ms, DEFAULT_RELOAD_DELAY_MS);
}

#[test]
fn custom_csrf_cookie_name_is_kept() {
    let config = ClientConfig::from_lookup(lookup_from(&[(CSRF_COOKIE_KEY, "doj_csrf")])).unwrap();
    assert_eq!(config.csrf_cookie, "doj_csrf");
}
