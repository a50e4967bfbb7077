//! # Pipelines
//!
//! The categorization and tagging workflows share one shape:
//!
//! 1. fetch everything they need (fatal on failure),
//! 2. ask the oracle about each candidate, tolerating per-item failures,
//! 3. show the accepted proposals,
//! 4. wait for confirmation,
//! 5. apply each proposal, tolerating per-item failures,
//! 6. report how many were applied.
//!
//! Items are processed strictly one at a time.

pub mod categorize;
pub mod confirm;
pub mod populate;
pub mod tagging;

pub use categorize::auto_categorize_recipes;
pub use confirm::{Confirmation, PromptConfirmation};
pub use populate::populate_categories;
pub use tagging::auto_tag_recipes;

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// No proposals survived the suggestion stage; nothing was asked or applied.
    NothingToDo,
    /// The user declined at the confirmation prompt; nothing was applied.
    Cancelled,
    /// `applied` of `total` proposals were written to the server.
    Completed { applied: usize, total: usize },
}

/// Truncates `items` to `limit`. `None` and `Some(0)` both mean "everything".
pub(crate) fn limited<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) if n > 0 && n < items.len() => &items[..n],
        _ => items,
    }
}

/// The ` (limited to N)` suffix for progress headers.
pub(crate) fn limit_note(limit: Option<usize>) -> String {
    match limit {
        Some(n) if n > 0 => format!(" (limited to {n})"),
        _ => String::new(),
    }
}
