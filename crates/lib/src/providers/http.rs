//! # Response Normalization
//!
//! Helpers shared by every HTTP-backed provider: turning non-2xx responses into
//! `ToolkitError::Transport` with a readable detail, and decoding bodies into
//! typed records.

use crate::errors::ToolkitError;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Passes successful responses through and converts any other status into a
/// transport error whose message reads `"<code> <reason>: <detail>"`.
///
/// The detail is the JSON error body when the server sent one, otherwise the
/// raw body text.
pub async fn error_for_status(response: Response) -> Result<Response, ToolkitError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = error_detail(&body);
    let message = format!(
        "{} {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status"),
        detail
    );
    Err(ToolkitError::Transport {
        status: Some(status.as_u16()),
        message,
    })
}

/// Prefers the structured error body, falling back to the text as sent.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Checks the status, then decodes the body as `T`.
///
/// A body that does not match `T` is a semantic error: the server answered,
/// just not with what `what` was expected to look like.
pub async fn decode_json<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T, ToolkitError> {
    let response = error_for_status(response).await?;
    let body = response.text().await?;
    debug!(what, bytes = body.len(), "<-- Received response body");
    serde_json::from_str(&body)
        .map_err(|e| ToolkitError::Semantic(format!("could not decode {what}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::error_detail;

    #[test]
    fn detail_prefers_compact_json() {
        assert_eq!(
            error_detail("{ \"detail\": \"Recipe not found\" }"),
            r#"{"detail":"Recipe not found"}"#
        );
    }

    #[test]
    fn detail_falls_back_to_text() {
        assert_eq!(error_detail("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_detail(""), "");
    }
}
