//! # Oracle Tests
//!
//! Drives `SuggestionOracle` through the real `OllamaProvider` against a mock
//! `/api/generate` endpoint.

use mealie_toolkit::types::Recipe;
use mealie_toolkit::{OllamaProvider, SuggestionOracle, ToolkitError};
use mealie_toolkit_test_utils::setup_tracing;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn oracle_answering(body: serde_json::Value) -> (SuggestionOracle, MockServer) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"model": "test-model", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(&server.uri(), "test-model", Duration::from_secs(5)).unwrap();
    (SuggestionOracle::new(Arc::new(provider)), server)
}

fn salad() -> Recipe {
    serde_json::from_value(json!({
        "name": "Garden Salad",
        "slug": "garden-salad",
        "description": "Fresh and green",
        "recipeIngredient": [
            {"ingredient": {"name": "Lettuce"}},
            {"ingredient": {"name": "Cucumber"}}
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn test_categorize_none_means_no_suggestion() {
    setup_tracing();
    for answer in ["NONE", "none", "  None \n"] {
        let (oracle, _server) = oracle_answering(json!({"response": answer, "done": true})).await;
        let result = oracle
            .categorize("Mystery Dish", &["Dessert", "Soup"])
            .await
            .unwrap();
        assert_eq!(result, None, "answer {answer:?} should map to no suggestion");
    }
}

#[tokio::test]
async fn test_categorize_returns_answer_verbatim() {
    setup_tracing();
    let (oracle, server) = oracle_answering(json!({"response": "Desserts\n"})).await;

    let result = oracle
        .categorize("Choco Cake", &["Dessert", "Soup"])
        .await
        .unwrap();

    // Not in the list, but the oracle does not validate; that is the caller's job.
    assert_eq!(result.as_deref(), Some("Desserts"));

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = requests[0].body_json().unwrap();
    let prompt = sent["prompt"].as_str().unwrap();
    assert!(prompt.contains("\"Choco Cake\""));
    assert!(prompt.contains("Dessert, Soup"));
}

#[tokio::test]
async fn test_missing_response_field_is_semantic_error() {
    setup_tracing();
    let (oracle, _server) = oracle_answering(json!({"done": true})).await;

    let err = oracle.categorize("Choco Cake", &["Dessert"]).await.unwrap_err();
    assert!(
        matches!(err, ToolkitError::Semantic(_)),
        "expected semantic error, got {err:?}"
    );
}

#[tokio::test]
async fn test_tag_applies_reads_leading_yes() {
    setup_tracing();
    let cases = [
        ("YES", true),
        ("Yes, because it has no meat.", true),
        ("No", false),
        ("Maybe", false),
    ];
    for (answer, expected) in cases {
        let (oracle, server) = oracle_answering(json!({"response": answer})).await;
        let applies = oracle.tag_applies(&salad(), "vegetarian").await.unwrap();
        assert_eq!(applies, expected, "answer {answer:?}");

        let requests = server.received_requests().await.unwrap();
        let sent: serde_json::Value = requests[0].body_json().unwrap();
        let prompt = sent["prompt"].as_str().unwrap();
        assert!(prompt.contains("Recipe Name: Garden Salad"));
        assert!(prompt.contains("Ingredients: Lettuce, Cucumber"));
    }
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "model 'test-model' not found"})),
        )
        .mount(&server)
        .await;
    let provider = OllamaProvider::new(&server.uri(), "test-model", Duration::from_secs(5)).unwrap();
    let oracle = SuggestionOracle::new(Arc::new(provider));

    let err = oracle.tag_applies(&salad(), "quick").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("model 'test-model' not found"));
}

#[tokio::test]
async fn test_slow_model_times_out() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "YES"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let provider =
        OllamaProvider::new(&server.uri(), "test-model", Duration::from_millis(100)).unwrap();
    let oracle = SuggestionOracle::new(Arc::new(provider));

    let err = oracle.tag_applies(&salad(), "quick").await.unwrap_err();

    assert!(
        matches!(err, ToolkitError::Transport { status: None, .. }),
        "expected a transport error without status, got {err:?}"
    );
}
