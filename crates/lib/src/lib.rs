//! # Mealie Toolkit
//!
//! Keeps a Mealie recipe server's categories and tags in shape with help from a
//! local Ollama model. Recipes and categories are fetched from Mealie, the model
//! proposes a category (or judges whether a tag applies) for each recipe, and
//! accepted proposals are written back after the user confirms them.
//!
//! The pieces, leaves first:
//! - [`providers::mealie::MealieClient`]: typed gateway to the Mealie REST API.
//! - [`providers::ai::AiProvider`] / [`providers::ai::ollama::OllamaProvider`]:
//!   the text-completion model.
//! - [`oracle::SuggestionOracle`]: prompt construction and answer parsing.
//! - [`pipeline`]: the categorization, tagging and bulk-category workflows.

pub mod config;
pub mod constants;
pub mod display;
pub mod errors;
pub mod oracle;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod types;

pub use config::ToolkitConfig;
pub use errors::ToolkitError;
pub use oracle::SuggestionOracle;
pub use pipeline::{Confirmation, PipelineOutcome, PromptConfirmation};
pub use providers::{ai::ollama::OllamaProvider, mealie::MealieClient};
