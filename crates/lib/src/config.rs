//! # Toolkit Configuration
//!
//! `ToolkitConfig` is built once by the caller (the CLI resolves it from flags,
//! the environment and `.env`) and passed into every component constructor.

use crate::constants::{
    DEFAULT_MEALIE_URL, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_ORACLE_TIMEOUT_SECS,
    DEFAULT_PAGE_SIZE,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitConfig {
    /// Base URL of the Mealie instance, without a trailing slash.
    pub mealie_url: String,
    /// Bearer token for the Mealie API. Requests are unauthenticated when unset.
    pub api_token: Option<String>,
    /// Base URL of the Ollama server, without a trailing slash.
    pub ollama_url: String,
    pub ollama_model: String,
    pub page_size: u32,
    pub oracle_timeout: Duration,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            mealie_url: DEFAULT_MEALIE_URL.to_string(),
            api_token: None,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            oracle_timeout: Duration::from_secs(DEFAULT_ORACLE_TIMEOUT_SECS),
        }
    }
}

impl ToolkitConfig {
    pub fn new(mealie_url: &str, ollama_url: &str) -> Self {
        Self {
            mealie_url: normalize_base_url(mealie_url),
            ollama_url: normalize_base_url(ollama_url),
            ..Self::default()
        }
    }

    pub fn with_api_token(mut self, api_token: Option<String>) -> Self {
        // An empty token in the environment means "no token".
        self.api_token = api_token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_ollama_model(mut self, model: &str) -> Self {
        self.ollama_model = model.to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout;
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
