use std::path::PathBuf;

use eharvest_client::FetchError;
use eharvest_core::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize JSON for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Only raised by the item pipeline when fail-fast is enabled.
    #[error("fetch failed for category {category}: {source}")]
    Fetch {
        category: Category,
        #[source]
        source: FetchError,
    },
}
