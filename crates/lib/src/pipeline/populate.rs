//! # Bulk Category Creation
//!
//! Creates categories from a text file holding one name per line.

use crate::{errors::ToolkitError, providers::mealie::MealieClient};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Result of a bulk creation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopulateReport {
    pub created: usize,
    pub total: usize,
}

/// Reads category names from `contents`: one per line, trimmed, blank lines
/// dropped.
pub fn parse_category_names(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Creates every category listed in `path`. A failed creation is reported and
/// does not stop the remaining ones.
pub async fn populate_categories(
    client: &MealieClient,
    path: &Path,
) -> Result<PopulateReport, ToolkitError> {
    if !path.is_file() {
        return Err(ToolkitError::Validation(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let names = parse_category_names(&fs::read_to_string(path)?);
    println!("Creating {} categories from file...\n", names.len());
    info!(file = %path.display(), count = names.len(), "Populating categories");

    let mut report = PopulateReport {
        created: 0,
        total: names.len(),
    };
    for name in &names {
        match client.create_category(name, None).await {
            Ok(category) => {
                println!("Created category: {} (ID: {})", category.name, category.id);
                report.created += 1;
            }
            Err(e) => {
                warn!(category = %name, error = %e, "Failed to create category");
                println!("Failed to create category '{name}': {e}");
            }
        }
    }

    println!("\nResults: {}/{} categories created", report.created, report.total);
    Ok(report)
}
