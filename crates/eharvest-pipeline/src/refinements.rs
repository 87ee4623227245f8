//! Refinement (search facet) export.

use eharvest_client::{extract_refinements, ElementsClient};
use eharvest_core::AppConfig;

use crate::error::PipelineError;
use crate::persist::write_json;
use crate::types::{RefinementsOutcome, RefinementsRunSummary};

/// Characters of the pretty-printed response logged when a category has no
/// refinements.
const PREVIEW_CHARS: usize = 500;

/// Runs the refinement pipeline over `config.categories`, writing
/// `{category}_refinements.json` into `config.refinements_dir` for every
/// category with non-empty refinement data.
///
/// Fetch failures, empty refinements, and per-file write failures are all
/// recorded in the summary and the run moves on to the next category.
///
/// # Errors
///
/// Returns [`PipelineError::Write`] only if the output directory cannot be
/// created before the loop starts.
pub async fn run_refinements_pipeline(
    client: &ElementsClient,
    config: &AppConfig,
) -> Result<RefinementsRunSummary, PipelineError> {
    let out_dir = config.refinements_dir.as_path();
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| PipelineError::Write {
            path: out_dir.to_path_buf(),
            source: e,
        })?;

    let mut summary = RefinementsRunSummary::default();

    for category in &config.categories {
        tracing::info!(%category, "processing category");

        let response = match client.fetch_refinements(category).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(%category, error = %e, "error fetching refinements");
                summary.outcomes.push((
                    category.clone(),
                    RefinementsOutcome::FetchFailed { cause: e.cause() },
                ));
                continue;
            }
        };

        if let Some(map) = response.as_object() {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            tracing::debug!(%category, ?keys, "response keys");
        }

        let Some(refinements) = extract_refinements(&response) else {
            tracing::warn!(
                %category,
                preview = %preview(&response),
                "no refinements found"
            );
            summary
                .outcomes
                .push((category.clone(), RefinementsOutcome::Empty));
            continue;
        };

        let outcome = match write_json(
            out_dir,
            &format!("{category}_refinements.json"),
            refinements,
        )
        .await
        {
            Ok(path) => RefinementsOutcome::Saved { path },
            Err(e) => {
                tracing::error!(%category, error = %e, "error saving refinements");
                RefinementsOutcome::WriteFailed {
                    cause: e.to_string(),
                }
            }
        };
        summary.outcomes.push((category.clone(), outcome));
    }

    Ok(summary)
}

fn preview(value: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
    let mut chars = pretty.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
