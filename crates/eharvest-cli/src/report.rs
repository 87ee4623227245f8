//! Console summaries printed after each pipeline run.

use eharvest_pipeline::{ItemsOutcome, ItemsRunSummary, RefinementsOutcome, RefinementsRunSummary};

pub(crate) fn print_items(summary: &ItemsRunSummary) {
    for (category, outcome) in &summary.outcomes {
        println!("  {category}: {}", describe_items(outcome));
    }
    println!(
        "items: {} of {} categories sampled, {} failed; schema written to {}",
        summary.sampled(),
        summary.outcomes.len(),
        summary.failed(),
        summary.schema_path.display()
    );
}

pub(crate) fn print_refinements(summary: &RefinementsRunSummary) {
    for (category, outcome) in &summary.outcomes {
        println!("  {category}: {}", describe_refinements(outcome));
    }
    println!(
        "refinements: {} of {} categories saved, {} failed",
        summary.saved(),
        summary.outcomes.len(),
        summary.failed()
    );
}

pub(crate) fn describe_items(outcome: &ItemsOutcome) -> String {
    match outcome {
        ItemsOutcome::Sampled { item_count } => format!("{item_count} items, sample saved"),
        ItemsOutcome::NoItems => "no items found".to_string(),
        ItemsOutcome::FetchFailed { cause } => format!("failed ({cause})"),
    }
}

pub(crate) fn describe_refinements(outcome: &RefinementsOutcome) -> String {
    match outcome {
        RefinementsOutcome::Saved { path } => format!("saved to {}", path.display()),
        RefinementsOutcome::Empty => "no refinements data".to_string(),
        RefinementsOutcome::FetchFailed { cause } => format!("fetch failed ({cause})"),
        RefinementsOutcome::WriteFailed { cause } => format!("write failed ({cause})"),
    }
}
