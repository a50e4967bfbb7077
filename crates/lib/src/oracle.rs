//! # Suggestion Oracle
//!
//! Turns the opaque text-completion model into the two questions the pipelines
//! ask: "which category fits this recipe?" and "does this tag apply?". Prompt
//! construction and answer parsing live here; transport lives in the provider.

use crate::{
    constants::MAX_PROMPT_INGREDIENTS,
    errors::ToolkitError,
    prompts::tasks::{CATEGORIZE_PROMPT, TAG_CHECK_PROMPT},
    providers::ai::AiProvider,
    types::Recipe,
};
use std::sync::Arc;
use tracing::debug;

/// The literal answer meaning "no category fits".
const NO_CATEGORY: &str = "NONE";

#[derive(Clone, Debug)]
pub struct SuggestionOracle {
    provider: Arc<dyn AiProvider>,
}

impl SuggestionOracle {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    /// Asks the model to pick one of `categories` for `recipe_name`.
    ///
    /// Returns `None` when the model answers `NONE` (any case) or nothing at
    /// all. Any other answer is returned verbatim; checking it against the
    /// category set is the caller's job.
    pub async fn categorize(
        &self,
        recipe_name: &str,
        categories: &[&str],
    ) -> Result<Option<String>, ToolkitError> {
        let prompt = build_categorize_prompt(recipe_name, categories);
        let raw = self.provider.generate(&prompt).await?;
        debug!(recipe = recipe_name, answer = %raw.trim(), "Category answer");
        Ok(parse_category_answer(&raw))
    }

    /// Asks the model whether `tag` describes `recipe`.
    pub async fn tag_applies(&self, recipe: &Recipe, tag: &str) -> Result<bool, ToolkitError> {
        let prompt = build_tag_prompt(recipe, tag);
        let raw = self.provider.generate(&prompt).await?;
        debug!(recipe = %recipe.name, tag, answer = %raw.trim(), "Tag answer");
        Ok(parse_tag_answer(&raw))
    }
}

pub fn build_categorize_prompt(recipe_name: &str, categories: &[&str]) -> String {
    CATEGORIZE_PROMPT
        .replace("{recipe_name}", recipe_name)
        .replace("{categories}", &categories.join(", "))
}

/// Includes at most the first `MAX_PROMPT_INGREDIENTS` ingredient names.
pub fn build_tag_prompt(recipe: &Recipe, tag: &str) -> String {
    let names: Vec<&str> = recipe
        .ingredient_names()
        .take(MAX_PROMPT_INGREDIENTS)
        .collect();
    let ingredients = if names.is_empty() {
        String::new()
    } else {
        format!("\nIngredients: {}", names.join(", "))
    };
    let recipe_name = if recipe.name.is_empty() {
        "Unknown"
    } else {
        recipe.name.as_str()
    };

    TAG_CHECK_PROMPT
        .replace("{tag}", tag)
        .replace("{recipe_name}", recipe_name)
        .replace("{description}", &recipe.description)
        .replace("{ingredients}", &ingredients)
}

pub fn parse_category_answer(raw: &str) -> Option<String> {
    let answer = raw.trim();
    if answer.is_empty() || answer.eq_ignore_ascii_case(NO_CATEGORY) {
        None
    } else {
        Some(answer.to_string())
    }
}

pub fn parse_tag_answer(raw: &str) -> bool {
    raw.trim().to_uppercase().starts_with("YES")
}
