pub mod ollama;

use crate::errors::ToolkitError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a text-completion model.
///
/// The toolkit treats the model as an opaque function from prompt text to
/// response text; everything domain-specific lives in `SuggestionOracle`.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends a single prompt and returns the raw completion text.
    async fn generate(&self, prompt: &str) -> Result<String, ToolkitError>;
}

dyn_clone::clone_trait_object!(AiProvider);
