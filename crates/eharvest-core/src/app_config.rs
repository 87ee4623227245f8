use std::path::PathBuf;

use crate::category::Category;

pub const DEFAULT_BASE_URL: &str = "https://elements.envato.com/data-api/page/items-neue-page";
pub const DEFAULT_CLIENT_VERSION: &str = "349f8adcd116f237fa5fb2ad345cc664b1a60659";
pub const DEFAULT_LANGUAGE_CODE: &str = "en";
pub const DEFAULT_SCHEMA_DIR: &str = "envato_schema";
pub const DEFAULT_REFINEMENTS_DIR: &str = "envato_refinements";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Static headers sent with every request so the upstream site treats the
/// harvester like an ordinary browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserHeaders {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub origin: String,
    pub referer: String,
}

impl Default for BrowserHeaders {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: "application/json, text/plain, */*".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            origin: "https://elements.envato.com".to_string(),
            referer: "https://elements.envato.com/".to_string(),
        }
    }
}

/// Immutable run configuration, loaded once at process start and passed by
/// reference to the client and both pipelines.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    /// Opaque upstream client build token. The service may reject or alter
    /// responses when it goes stale.
    pub client_version: String,
    pub language_code: String,
    pub categories: Vec<Category>,
    pub schema_dir: PathBuf,
    pub refinements_dir: PathBuf,
    pub headers: BrowserHeaders,
    /// `None` keeps the HTTP client's default timeout behaviour.
    pub request_timeout_secs: Option<u64>,
    /// Abort the item pipeline on the first network failure instead of
    /// skipping the category.
    pub items_fail_fast: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            categories: Category::defaults(),
            schema_dir: PathBuf::from(DEFAULT_SCHEMA_DIR),
            refinements_dir: PathBuf::from(DEFAULT_REFINEMENTS_DIR),
            headers: BrowserHeaders::default(),
            request_timeout_secs: None,
            items_fail_fast: false,
            log_level: "info".to_string(),
        }
    }
}
