//! Item sampling and schema export.
//!
//! For every category: fetch one page of search results, save the raw
//! response, save the first item as a sample, and infer its schema. The
//! schemas of all sampled categories are written to one combined file at the
//! end of the run.
//!
//! Schemas come from a single sample item per category. See
//! [`eharvest_client::schema`] for what that does and does not capture.

use eharvest_client::{
    extract_items, infer_schema, ElementsClient, ItemSchema, DEFAULT_PAGE, DEFAULT_QUERY,
};
use eharvest_core::{AppConfig, Category};
use indexmap::IndexMap;

use crate::error::PipelineError;
use crate::persist::write_json;
use crate::types::{ItemsOutcome, ItemsRunSummary};

pub const COMBINED_SCHEMA_FILE: &str = "all_categories_schema.json";

/// Search parameters shared by every category in an item run.
#[derive(Debug, Clone)]
pub struct ItemsRequest {
    pub query: String,
    pub page: u32,
}

impl Default for ItemsRequest {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            page: DEFAULT_PAGE,
        }
    }
}

/// Runs the item pipeline over `config.categories`, writing into
/// `config.schema_dir`.
///
/// Files written per category: `{category}_full_response.json` always (the
/// `{"error": ...}` document when the fetch failed) and
/// `{category}_sample_item.json` when at least one item came back. Then
/// [`COMBINED_SCHEMA_FILE`] maps every sampled category to its schema.
///
/// # Errors
///
/// - [`PipelineError::Write`] / [`PipelineError::Serialize`] on any file
///   write failure; the run stops there.
/// - [`PipelineError::Fetch`] on a network failure when
///   `config.items_fail_fast` is set. Otherwise fetch failures are recorded
///   per category and the run continues.
pub async fn run_items_pipeline(
    client: &ElementsClient,
    config: &AppConfig,
    request: &ItemsRequest,
) -> Result<ItemsRunSummary, PipelineError> {
    let out_dir = config.schema_dir.as_path();
    let mut all_schemas: IndexMap<Category, ItemSchema> = IndexMap::new();
    let mut outcomes = Vec::with_capacity(config.categories.len());

    for category in &config.categories {
        tracing::info!(%category, "processing category");

        let (response, fetch_error) = match client
            .fetch_items(category, &request.query, request.page)
            .await
        {
            Ok(value) => (value, None),
            Err(e) if e.is_network() && config.items_fail_fast => {
                return Err(PipelineError::Fetch {
                    category: category.clone(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::warn!(%category, error = %e, "fetch failed");
                (e.to_error_value(), Some(e.cause()))
            }
        };

        write_json(out_dir, &format!("{category}_full_response.json"), &response).await?;

        if let Some(cause) = fetch_error {
            outcomes.push((category.clone(), ItemsOutcome::FetchFailed { cause }));
            continue;
        }

        let items = extract_items(&response);
        let Some(sample) = items.first() else {
            tracing::info!(%category, "no items found");
            outcomes.push((category.clone(), ItemsOutcome::NoItems));
            continue;
        };
        tracing::info!(%category, count = items.len(), "found items");

        write_json(out_dir, &format!("{category}_sample_item.json"), sample).await?;
        all_schemas.insert(category.clone(), infer_schema(sample));
        outcomes.push((
            category.clone(),
            ItemsOutcome::Sampled {
                item_count: items.len(),
            },
        ));
    }

    let schema_path = write_json(out_dir, COMBINED_SCHEMA_FILE, &all_schemas).await?;
    tracing::info!(categories = all_schemas.len(), "schema analysis complete");

    Ok(ItemsRunSummary {
        outcomes,
        schema_path,
    })
}
