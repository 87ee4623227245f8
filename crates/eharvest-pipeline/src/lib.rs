//! Category-driven harvesting pipelines.
//!
//! Each pipeline walks the configured category list in order, fetches one
//! response per category, and writes formatted JSON files. Fetch failures for one
//! category are logged and recorded in the run summary; the loop carries on
//! with the next category.

pub mod error;
pub mod items;
pub mod persist;
pub mod refinements;
pub mod types;

pub use error::PipelineError;
pub use items::{run_items_pipeline, ItemsRequest, COMBINED_SCHEMA_FILE};
pub use persist::write_json;
pub use refinements::run_refinements_pipeline;
pub use types::{ItemsOutcome, ItemsRunSummary, RefinementsOutcome, RefinementsRunSummary};
