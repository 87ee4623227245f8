use serde::{Deserialize, Serialize};

/// Categories harvested when `EHARVEST_CATEGORIES` is not set, in run order.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "photos",
    "stock-video",
    "audio",
    "graphics",
    "3d",
    "fonts",
    "video-templates",
    "graphic-templates",
];

/// A content classification recognised by the upstream marketplace API.
///
/// Any string is accepted; the upstream service decides whether it knows the
/// category. Only the values in [`DEFAULT_CATEGORIES`] are exercised by
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in category list, in declared order.
    #[must_use]
    pub fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES.iter().map(|c| Category::new(*c)).collect()
    }

    /// Parse a comma-separated list, trimming whitespace and dropping empty
    /// entries. Order is preserved and duplicates are kept.
    #[must_use]
    pub fn parse_list(raw: &str) -> Vec<Category> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Category::new)
            .collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
