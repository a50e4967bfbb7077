//! # Default Task Prompts
//!
//! Templates for the two questions the toolkit asks the model. Placeholders in
//! braces are filled in by `SuggestionOracle`.

// --- Categorization ---

/// Placeholders: `{recipe_name}`, `{categories}`
pub const CATEGORIZE_PROMPT: &str = r#"Given the recipe name "{recipe_name}", select which of these categories it belongs to: {categories}

Return only the category name that best fits the recipe name
Return only the category name, no other text
If none of the categories fit, return NONE
"#;

// --- Tag Check ---

/// Placeholders: `{tag}`, `{recipe_name}`, `{description}`, `{ingredients}`
///
/// `{ingredients}` is either empty or a line of the form `\nIngredients: a, b`.
pub const TAG_CHECK_PROMPT: &str = r#"Based on this recipe, does it appear to be {tag}?

Recipe Name: {recipe_name}
Description: {description}{ingredients}

Answer with only "YES" or "NO", nothing else.
"#;
