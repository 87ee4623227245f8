use std::path::PathBuf;

use eharvest_core::Category;

/// What happened to one category in an item run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsOutcome {
    /// At least one item came back; a sample and schema were recorded.
    Sampled { item_count: usize },
    /// The response had no `data.data.items`, or the list was empty.
    NoItems,
    /// The fetch failed; the error document was saved as the full response.
    FetchFailed { cause: String },
}

#[derive(Debug, Clone)]
pub struct ItemsRunSummary {
    pub outcomes: Vec<(Category, ItemsOutcome)>,
    /// Location of the combined `all_categories_schema.json`.
    pub schema_path: PathBuf,
}

impl ItemsRunSummary {
    #[must_use]
    pub fn sampled(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, ItemsOutcome::Sampled { .. }))
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, ItemsOutcome::FetchFailed { .. }))
            .count()
    }

    #[must_use]
    pub fn outcome(&self, category: &str) -> Option<&ItemsOutcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| c.as_str() == category)
            .map(|(_, o)| o)
    }
}

/// What happened to one category in a refinement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefinementsOutcome {
    Saved { path: PathBuf },
    /// Missing or empty `data.data.refinements.data`; nothing written.
    Empty,
    FetchFailed { cause: String },
    WriteFailed { cause: String },
}

#[derive(Debug, Clone, Default)]
pub struct RefinementsRunSummary {
    pub outcomes: Vec<(Category, RefinementsOutcome)>,
}

impl RefinementsRunSummary {
    #[must_use]
    pub fn saved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, RefinementsOutcome::Saved { .. }))
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| {
                matches!(
                    o,
                    RefinementsOutcome::FetchFailed { .. } | RefinementsOutcome::WriteFailed { .. }
                )
            })
            .count()
    }

    #[must_use]
    pub fn outcome(&self, category: &str) -> Option<&RefinementsOutcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| c.as_str() == category)
            .map(|(_, o)| o)
    }
}
