//! # Tagging Pipeline
//!
//! Checks every recipe (up to a limit) against one tag and, once confirmed,
//! applies that tag to the matches. Unlike categorization there is no
//! "already tagged" filter.

use crate::{
    display::format_tag_matches,
    errors::ToolkitError,
    oracle::SuggestionOracle,
    pipeline::{limit_note, limited, Confirmation, PipelineOutcome},
    providers::mealie::MealieClient,
    types::{Recipe, TagMatch},
};
use tracing::{info, warn};

/// What the matching stage produced.
#[derive(Debug, Default)]
pub struct TagMatchBatch {
    pub matches: Vec<TagMatch>,
    /// Recipes whose oracle call failed.
    pub failed: usize,
}

pub async fn auto_tag_recipes(
    client: &MealieClient,
    oracle: &SuggestionOracle,
    confirmation: &mut dyn Confirmation,
    tag: &str,
    limit: Option<usize>,
) -> Result<PipelineOutcome, ToolkitError> {
    println!("Fetching all recipes...");
    let recipes = client.fetch_recipes().await?;
    println!("Retrieved {} recipes\n", recipes.len());

    let TagMatchBatch { matches, failed } =
        collect_tag_matches(oracle, &recipes, tag, limit).await;
    info!(tag, matches = matches.len(), failed, "Tag check finished");
    println!("\n{} matched, {failed} failed", matches.len());

    if matches.is_empty() {
        println!("\nNo recipes matched the tag.");
        return Ok(PipelineOutcome::NothingToDo);
    }

    print!("{}", format_tag_matches(&matches, tag));

    if !confirmation.confirm(&format!("Apply tag '{tag}' to these recipes?"))? {
        println!("Tagging cancelled.");
        return Ok(PipelineOutcome::Cancelled);
    }

    let applied = apply_tags(client, &matches, tag).await;
    let total = matches.len();
    println!("\nResults: {applied}/{total} recipes tagged");

    Ok(PipelineOutcome::Completed { applied, total })
}

/// Collects the recipes the oracle says match `tag`. Oracle failures are
/// reported, counted and skipped.
pub async fn collect_tag_matches(
    oracle: &SuggestionOracle,
    recipes: &[Recipe],
    tag: &str,
    limit: Option<usize>,
) -> TagMatchBatch {
    let candidates = limited(recipes, limit);
    let count = candidates.len();
    println!("Checking recipes for '{tag}' tag{}...\n", limit_note(limit));

    let mut batch = TagMatchBatch::default();
    for (i, recipe) in candidates.iter().enumerate() {
        let position = format!("[{}/{}]", i + 1, count);
        match oracle.tag_applies(recipe, tag).await {
            Ok(true) => {
                println!("{position} [OK] {} (matches '{tag}')", recipe.name);
                batch.matches.push(TagMatch {
                    recipe_name: recipe.name.clone(),
                    recipe_slug: recipe.slug.clone(),
                });
            }
            Ok(false) => println!("{position} [-] {} (does not match '{tag}')", recipe.name),
            Err(e) => {
                warn!(recipe = %recipe.name, tag, error = %e, "Tag check failed");
                println!("{position} [ERR] Error processing {}: {e}", recipe.name);
                batch.failed += 1;
            }
        }
    }

    batch
}

/// Tags each match and returns how many succeeded.
///
/// Each call replaces the recipe's existing tags with `tag`.
pub async fn apply_tags(client: &MealieClient, matches: &[TagMatch], tag: &str) -> usize {
    println!("\nApplying tags...\n");
    let mut tagged = 0;

    for matched in matches {
        match client.add_recipe_tag(&matched.recipe_slug, tag).await {
            Ok(_) => {
                println!("[OK] {} -> {tag}", matched.recipe_name);
                tagged += 1;
            }
            Err(e) => {
                warn!(recipe = %matched.recipe_name, tag, error = %e, "Failed to apply tag");
                println!("[ERR] Failed to tag {}: {e}", matched.recipe_name);
            }
        }
    }

    tagged
}
