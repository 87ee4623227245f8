//! HTTP client and response helpers for the Envato Elements
//! `items-neue-page` data API.

pub mod client;
pub mod error;
pub mod extract;
pub mod schema;

pub use client::{ElementsClient, DEFAULT_PAGE, DEFAULT_QUERY};
pub use error::FetchError;
pub use extract::{extract_items, extract_refinements};
pub use schema::{infer_schema, FieldType, ItemSchema};
