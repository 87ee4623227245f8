use thiserror::Error;

/// Errors returned by [`crate::ElementsClient`].
///
/// None of these abort a harvest on their own; the pipelines decide per
/// category whether to skip or stop.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body of a `200 OK` response was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl FetchError {
    /// HTTP status code carried by the error, if the server responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UnexpectedStatus { status, .. } => Some(*status),
            FetchError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `true` for connection, DNS, timeout, and other transport failures.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Http(_))
    }

    /// Short cause in the form written to `{"error": ...}` documents.
    #[must_use]
    pub fn cause(&self) -> String {
        match self {
            FetchError::UnexpectedStatus { status, .. } => format!("HTTP error {status}"),
            FetchError::Deserialize { .. } => "JSON decode error".to_string(),
            FetchError::Http(e) => e.to_string(),
            FetchError::InvalidBaseUrl { .. } => self.to_string(),
        }
    }

    /// JSON document stored in place of a response body when a fetch fails.
    #[must_use]
    pub fn to_error_value(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.cause() })
    }
}
