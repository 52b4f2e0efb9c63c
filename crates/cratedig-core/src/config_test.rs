use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CRATEDIG_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.scan_cooldown_ms, 5000);
    assert_eq!(cfg.http_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "cratedig/0.1 (record-lookup)");
    assert_eq!(cfg.spotify_base_url, "https://api.spotify.com/v1/");
    assert!(cfg.spotify_token.is_none());
    assert_eq!(cfg.discogs_base_url, "https://api.discogs.com/");
    assert!(cfg.discogs_token.is_none());
    assert!((cfg.store_search_radius_km - 20.0).abs() < f64::EPSILON);
}

#[test]
fn scan_cooldown_ms_override() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_SCAN_COOLDOWN_MS", "1500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scan_cooldown_ms, 1500);
}

#[test]
fn scan_cooldown_ms_invalid() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_SCAN_COOLDOWN_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRATEDIG_SCAN_COOLDOWN_MS"),
        "expected InvalidEnvVar(CRATEDIG_SCAN_COOLDOWN_MS), got: {result:?}"
    );
}

#[test]
fn http_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_HTTP_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRATEDIG_HTTP_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CRATEDIG_HTTP_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn store_search_radius_km_must_be_positive() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_STORE_SEARCH_RADIUS_KM", "-3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRATEDIG_STORE_SEARCH_RADIUS_KM"),
        "expected InvalidEnvVar(CRATEDIG_STORE_SEARCH_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn store_search_radius_km_override() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_STORE_SEARCH_RADIUS_KM", "7.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.store_search_radius_km - 7.5).abs() < f64::EPSILON);
}

#[test]
fn blank_tokens_are_treated_as_absent() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_SPOTIFY_TOKEN", "   ");
    map.insert("CRATEDIG_DISCOGS_TOKEN", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.spotify_token.is_none());
    assert!(cfg.discogs_token.is_none());
}

#[test]
fn tokens_are_trimmed_and_kept() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_SPOTIFY_TOKEN", " sp-token ");
    map.insert("CRATEDIG_DISCOGS_TOKEN", "dg-token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.spotify_token.as_deref(), Some("sp-token"));
    assert_eq!(cfg.discogs_token.as_deref(), Some("dg-token"));
}

#[test]
fn debug_output_redacts_tokens() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_SPOTIFY_TOKEN", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn build_app_config_fails_on_invalid_env() {
    let mut map = HashMap::new();
    map.insert("CRATEDIG_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CRATEDIG_ENV"),
        "expected InvalidEnvVar(CRATEDIG_ENV), got: {result:?}"
    );
}
