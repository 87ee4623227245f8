//! HTTP client for the Envato Elements `items-neue-page` data API.
//!
//! Builds the category-derived request URLs and performs a single GET per
//! call with browser-like headers. There is no retry, backoff, or rate
//! limiting: every failure comes back to the caller as a [`FetchError`].

use std::time::Duration;

use eharvest_core::{AppConfig, BrowserHeaders, Category};
use reqwest::{Client, StatusCode, Url};

use crate::error::FetchError;

/// Search term used by the item pipeline when none is given.
pub const DEFAULT_QUERY: &str = "Blue";

/// Result page requested by the item pipeline when none is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Client for the Envato Elements data API.
///
/// Holds the endpoint, client-version token, and header set from
/// [`AppConfig`]. Point `AppConfig::base_url` at a mock server to test.
pub struct ElementsClient {
    client: Client,
    base_url: Url,
    client_version: String,
    language_code: String,
    headers: BrowserHeaders,
}

impl ElementsClient {
    /// Creates a client from the run configuration.
    ///
    /// The request timeout is only set when `request_timeout_secs` is
    /// configured; otherwise `reqwest`'s default applies.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`FetchError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| FetchError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        let mut builder = Client::builder().user_agent(config.headers.user_agent.as_str());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url,
            client_version: config.client_version.clone(),
            language_code: config.language_code.clone(),
            headers: config.headers.clone(),
        })
    }

    /// URL for one page of search results: `path=/{category}/{query lowercased}`.
    #[must_use]
    pub fn items_url(&self, category: &Category, query: &str, page: u32) -> Url {
        let path = format!("/{category}/{}", query.to_lowercase());
        self.build_url(&path, Some(page))
    }

    /// URL for a category's landing page, which carries the refinement
    /// facets: `path=/{category}/` with no search term and no page.
    #[must_use]
    pub fn refinements_url(&self, category: &Category) -> Url {
        self.build_url(&format!("/{category}/"), None)
    }

    /// Fetches one page of items for `category` matching `query`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] for any status other than `200`.
    /// - [`FetchError::Deserialize`] if the body is not JSON.
    /// - [`FetchError::Http`] on network failure.
    pub async fn fetch_items(
        &self,
        category: &Category,
        query: &str,
        page: u32,
    ) -> Result<serde_json::Value, FetchError> {
        let url = self.items_url(category, query, page);
        tracing::info!(%category, query, page, %url, "fetching items");
        self.fetch_json(category, &url).await
    }

    /// Fetches the landing page response for `category`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_items`].
    pub async fn fetch_refinements(
        &self,
        category: &Category,
    ) -> Result<serde_json::Value, FetchError> {
        let url = self.refinements_url(category);
        tracing::info!(%category, %url, "fetching refinements");
        self.fetch_json(category, &url).await
    }

    /// Appends the fixed query parameters via [`Url::query_pairs_mut`], so
    /// the path segment is percent-encoded.
    fn build_url(&self, path: &str, page: Option<u32>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("path", path);
            pairs.append_pair("languageCode", &self.language_code);
            pairs.append_pair("clientVersion", &self.client_version);
            if let Some(page) = page {
                pairs.append_pair("page", &page.to_string());
            }
        }
        url
    }

    async fn fetch_json(
        &self,
        category: &Category,
        url: &Url,
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, &self.headers.accept)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.headers.accept_language)
            .header(reqwest::header::ORIGIN, &self.headers.origin)
            .header(reqwest::header::REFERER, &self.headers.referer)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%category, status = status.as_u16(), "non-200 response");
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%category, error = %e, "response body is not valid JSON");
            FetchError::Deserialize {
                context: format!("{category} response from {url}"),
                source: e,
            }
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
