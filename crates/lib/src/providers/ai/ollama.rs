use crate::{
    config::ToolkitConfig, constants::OLLAMA_GENERATE_PATH, errors::ToolkitError,
    providers::ai::AiProvider, providers::http::decode_json,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;

// --- Ollama request and response structures ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    response: Option<String>,
}

// --- Ollama Provider implementation ---

/// A provider for a local Ollama server's `/api/generate` endpoint.
#[derive(Clone, Debug)]
pub struct OllamaProvider {
    client: ReqwestClient,
    api_url: String,
    model: String,
}

impl OllamaProvider {
    /// Creates a new `OllamaProvider`. Every completion is bounded by `timeout`.
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, ToolkitError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ToolkitError::ClientBuild)?;
        Ok(Self {
            client,
            api_url: format!(
                "{}{OLLAMA_GENERATE_PATH}",
                base_url.trim_end_matches('/')
            ),
            model: model.to_string(),
        })
    }

    pub fn from_config(config: &ToolkitConfig) -> Result<Self, ToolkitError> {
        Self::new(
            &config.ollama_url,
            &config.ollama_model,
            config.oracle_timeout,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AiProvider for OllamaProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ToolkitError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!(model = %self.model, prompt = %prompt, "--> Sending prompt to Ollama");
        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await?;

        let generated: GenerateResponse = decode_json(response, "Ollama response").await?;
        let text = generated.response.ok_or_else(|| {
            ToolkitError::Semantic("Invalid response from Ollama: missing `response` field".into())
        })?;
        debug!("<-- Completion from Ollama: {}", text);

        Ok(text)
    }
}
