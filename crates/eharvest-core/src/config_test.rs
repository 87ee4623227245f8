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
fn build_app_config_with_empty_env_uses_builtin_constants() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("empty env is valid");

    assert_eq!(
        cfg.base_url,
        "https://elements.envato.com/data-api/page/items-neue-page"
    );
    assert_eq!(cfg.client_version, "349f8adcd116f237fa5fb2ad345cc664b1a60659");
    assert_eq!(cfg.language_code, "en");
    assert_eq!(cfg.categories, Category::defaults());
    assert_eq!(cfg.schema_dir, PathBuf::from("envato_schema"));
    assert_eq!(cfg.refinements_dir, PathBuf::from("envato_refinements"));
    assert_eq!(cfg.headers, BrowserHeaders::default());
    assert!(cfg.request_timeout_secs.is_none());
    assert!(!cfg.items_fail_fast);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn client_version_override() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_CLIENT_VERSION", "abc123");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.client_version, "abc123");
}

#[test]
fn categories_override_keeps_order() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_CATEGORIES", "audio, photos");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.categories,
        vec![Category::new("audio"), Category::new("photos")]
    );
}

#[test]
fn categories_override_rejects_empty_list() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_CATEGORIES", " , ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "EHARVEST_CATEGORIES"),
        "expected InvalidEnvVar(EHARVEST_CATEGORIES), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_REQUEST_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, Some(45));
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "EHARVEST_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(EHARVEST_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn items_fail_fast_accepts_common_spellings() {
    for (raw, expected) in [("true", true), ("YES", true), ("1", true), ("off", false)] {
        let mut map = HashMap::new();
        map.insert("EHARVEST_ITEMS_FAIL_FAST", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.items_fail_fast, expected, "input: {raw}");
    }
}

#[test]
fn items_fail_fast_invalid() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_ITEMS_FAIL_FAST", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "EHARVEST_ITEMS_FAIL_FAST"),
        "expected InvalidEnvVar(EHARVEST_ITEMS_FAIL_FAST), got: {result:?}"
    );
}

#[test]
fn user_agent_override_keeps_other_headers() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.headers.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.headers.origin, "https://elements.envato.com");
    assert_eq!(cfg.headers.referer, "https://elements.envato.com/");
}

#[test]
fn output_dirs_override() {
    let mut map = HashMap::new();
    map.insert("EHARVEST_SCHEMA_DIR", "/tmp/schema");
    map.insert("EHARVEST_REFINEMENTS_DIR", "/tmp/refinements");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.schema_dir, PathBuf::from("/tmp/schema"));
    assert_eq!(cfg.refinements_dir, PathBuf::from("/tmp/refinements"));
}
