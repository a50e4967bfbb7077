//! # Terminal Formatting
//!
//! Plain-text renderings of records and proposal batches shown to the user.

use crate::types::{Category, Recipe, Suggestion, TagMatch};
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn format_categories(categories: &[Category]) -> String {
    let mut out = format!("Found {} categories:\n\n", categories.len());
    for category in categories {
        let _ = writeln!(out, "  - {} (ID: {})", category.name, category.id);
    }
    out
}

pub fn format_category(category: &Category) -> String {
    format!(
        "{}\n    ID: {}\n    Slug: {}\n",
        category.name, category.id, category.slug
    )
}

pub fn format_recipes(recipes: &[Recipe]) -> String {
    let mut out = format!("Found {} recipes:\n\n", recipes.len());
    for recipe in recipes {
        let id = recipe
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(out, "  - {}", recipe.name);
        let _ = writeln!(out, "    ID: {id}");
        let _ = writeln!(out, "    Slug: {}", recipe.slug);
        if recipe.is_categorized() {
            let names: Vec<&str> = recipe
                .recipe_category
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            let _ = writeln!(out, "    Categories: {}", names.join(", "));
        }
        out.push('\n');
    }
    out
}

/// The batch of category proposals shown before confirmation.
pub fn format_suggestions(suggestions: &[Suggestion]) -> String {
    let mut out = format!(
        "\n{}\nFound {} recipes to categorize:\n\n",
        rule(),
        suggestions.len()
    );
    for (i, suggestion) in suggestions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:3}. {} -> {}",
            i + 1,
            suggestion.recipe_name,
            suggestion.category_name
        );
    }
    let _ = writeln!(out, "\n{}", rule());
    out
}

/// The batch of tag matches shown before confirmation.
pub fn format_tag_matches(matches: &[TagMatch], tag: &str) -> String {
    let mut out = format!(
        "\n{}\nFound {} recipes to tag with '{}':\n\n",
        rule(),
        matches.len(),
        tag
    );
    for (i, matched) in matches.iter().enumerate() {
        let _ = writeln!(out, "{:3}. {}", i + 1, matched.recipe_name);
    }
    let _ = writeln!(out, "\n{}", rule());
    out
}
