use std::path::PathBuf;

use crate::app_config::{
    AppConfig, BrowserHeaders, DEFAULT_BASE_URL, DEFAULT_CLIENT_VERSION, DEFAULT_LANGUAGE_CODE,
    DEFAULT_REFINEMENTS_DIR, DEFAULT_SCHEMA_DIR, DEFAULT_USER_AGENT,
};
use crate::category::Category;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable is optional; an empty environment reproduces the built-in
/// endpoint, client version, categories, and output directories.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got '{raw}'"),
            }),
            Err(_) => Ok(default),
        }
    };

    let categories = match lookup("EHARVEST_CATEGORIES") {
        Ok(raw) => {
            let parsed = Category::parse_list(&raw);
            if parsed.is_empty() {
                return Err(ConfigError::InvalidEnvVar {
                    var: "EHARVEST_CATEGORIES".to_string(),
                    reason: "no categories listed".to_string(),
                });
            }
            parsed
        }
        Err(_) => Category::defaults(),
    };

    let headers = BrowserHeaders {
        user_agent: or_default("EHARVEST_USER_AGENT", DEFAULT_USER_AGENT),
        ..BrowserHeaders::default()
    };

    Ok(AppConfig {
        base_url: or_default("EHARVEST_BASE_URL", DEFAULT_BASE_URL),
        client_version: or_default("EHARVEST_CLIENT_VERSION", DEFAULT_CLIENT_VERSION),
        language_code: or_default("EHARVEST_LANGUAGE_CODE", DEFAULT_LANGUAGE_CODE),
        categories,
        schema_dir: PathBuf::from(or_default("EHARVEST_SCHEMA_DIR", DEFAULT_SCHEMA_DIR)),
        refinements_dir: PathBuf::from(or_default(
            "EHARVEST_REFINEMENTS_DIR",
            DEFAULT_REFINEMENTS_DIR,
        )),
        headers,
        request_timeout_secs: parse_optional_u64("EHARVEST_REQUEST_TIMEOUT_SECS")?,
        items_fail_fast: parse_bool("EHARVEST_ITEMS_FAIL_FAST", false)?,
        log_level: or_default("EHARVEST_LOG_LEVEL", "info"),
    })
}

/// Accepts the usual spellings of a boolean flag, case-insensitively.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
