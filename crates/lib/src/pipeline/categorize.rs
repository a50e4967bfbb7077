//! # Categorization Pipeline
//!
//! Proposes a category for every uncategorized recipe and, once confirmed,
//! writes the proposals back to Mealie.

use crate::{
    display::format_suggestions,
    errors::ToolkitError,
    oracle::SuggestionOracle,
    pipeline::{limit_note, limited, Confirmation, PipelineOutcome},
    providers::mealie::MealieClient,
    types::{Category, CategoryRef, Recipe, Suggestion},
};
use std::collections::HashMap;
use tracing::{info, warn};

/// What the suggestion stage produced.
#[derive(Debug, Default)]
pub struct SuggestionBatch {
    pub suggestions: Vec<Suggestion>,
    /// Recipes skipped because they already had a category.
    pub skipped: usize,
    /// Recipes whose oracle call failed.
    pub failed: usize,
}

/// Runs the full fetch, suggest, confirm and apply sequence.
///
/// `limit` caps the recipes considered, and is applied before already
/// categorized recipes are filtered out.
pub async fn auto_categorize_recipes(
    client: &MealieClient,
    oracle: &SuggestionOracle,
    confirmation: &mut dyn Confirmation,
    limit: Option<usize>,
) -> Result<PipelineOutcome, ToolkitError> {
    println!("Fetching all categories...");
    let categories = client.fetch_categories().await?;
    println!("Retrieved {} categories", categories.len());

    println!("Fetching all recipes...");
    let recipes = client.fetch_recipes().await?;
    println!("Retrieved {} recipes\n", recipes.len());

    let batch = collect_category_suggestions(oracle, &recipes, &categories, limit).await;
    info!(
        suggestions = batch.suggestions.len(),
        skipped = batch.skipped,
        failed = batch.failed,
        "Suggestion stage finished"
    );
    println!(
        "\nSkipped {} already categorized, {} failed",
        batch.skipped, batch.failed
    );

    if batch.suggestions.is_empty() {
        println!("\nNo category suggestions to apply.");
        return Ok(PipelineOutcome::NothingToDo);
    }

    print!("{}", format_suggestions(&batch.suggestions));

    if !confirmation.confirm("Apply these categories?")? {
        println!("Categorization cancelled.");
        return Ok(PipelineOutcome::Cancelled);
    }

    let applied = apply_category_suggestions(client, &batch.suggestions).await;
    let total = batch.suggestions.len();
    println!("\nResults: {applied}/{total} recipes categorized");

    Ok(PipelineOutcome::Completed { applied, total })
}

/// Asks the oracle for a category for each uncategorized recipe.
///
/// A suggestion is kept only if its name exactly matches a category in
/// `categories`; the stored category is the one from that set.
pub async fn collect_category_suggestions(
    oracle: &SuggestionOracle,
    recipes: &[Recipe],
    categories: &[Category],
    limit: Option<usize>,
) -> SuggestionBatch {
    let mut lookup: HashMap<&str, &Category> = HashMap::new();
    for category in categories {
        lookup.entry(category.name.as_str()).or_insert(category);
    }
    let category_names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();

    let candidates = limited(recipes, limit);
    let count = candidates.len();
    println!(
        "Collecting category suggestions{}...\n",
        limit_note(limit)
    );

    let mut batch = SuggestionBatch::default();
    for (i, recipe) in candidates.iter().enumerate() {
        let position = format!("[{}/{}]", i + 1, count);

        if recipe.is_categorized() {
            println!("{position} [SKIP] {} (already categorized)", recipe.name);
            batch.skipped += 1;
            continue;
        }

        match oracle.categorize(&recipe.name, &category_names).await {
            Ok(Some(name)) => match lookup.get(name.as_str()) {
                Some(category) => {
                    println!("{position} [OK] {} -> {}", recipe.name, name);
                    batch.suggestions.push(Suggestion {
                        recipe_name: recipe.name.clone(),
                        recipe_slug: recipe.slug.clone(),
                        category_name: name,
                        category: (*category).clone(),
                    });
                }
                None => {
                    println!(
                        "{position} [-] {} (suggested unknown category '{}')",
                        recipe.name, name
                    );
                }
            },
            Ok(None) => println!("{position} [-] {} (no suggestion)", recipe.name),
            Err(e) => {
                warn!(recipe = %recipe.name, error = %e, "Category suggestion failed");
                println!("{position} [ERR] Error processing {}: {e}", recipe.name);
                batch.failed += 1;
            }
        }
    }

    batch
}

/// Writes each suggestion to the server and returns how many succeeded.
pub async fn apply_category_suggestions(
    client: &MealieClient,
    suggestions: &[Suggestion],
) -> usize {
    println!("\nApplying categories...\n");
    let mut applied = 0;

    for suggestion in suggestions {
        let categories: [CategoryRef; 1] = [suggestion.category.clone().into()];
        match client
            .update_recipe_categories(&suggestion.recipe_slug, &categories)
            .await
        {
            Ok(_) => {
                println!(
                    "[OK] {} -> {}",
                    suggestion.recipe_name, suggestion.category_name
                );
                applied += 1;
            }
            Err(e) => {
                warn!(recipe = %suggestion.recipe_name, error = %e, "Failed to apply category");
                println!("[ERR] Failed to categorize {}: {e}", suggestion.recipe_name);
            }
        }
    }

    applied
}
