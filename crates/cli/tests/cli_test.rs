//! # CLI Command Tests
//!
//! Runs the `mealie-toolkit` binary end to end. Each run happens inside a
//! temporary directory so the log file and any `.env` lookup stay isolated.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A command with no connection settings leaking in from the environment.
fn toolkit_cmd(workdir: &Path, mealie_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("mealie-toolkit").unwrap();
    cmd.current_dir(workdir)
        .env_remove("MEALIE_API_TOKEN")
        .env_remove("OLLAMA_URL")
        .env_remove("OLLAMA_MODEL")
        .env_remove("OLLAMA_TIMEOUT_SECS")
        .env("MEALIE_URL", mealie_url);
    cmd
}

#[test]
fn test_help_lists_every_command() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = toolkit_cmd(temp_dir.path(), "http://127.0.0.1:9");
    cmd.arg("--help");

    cmd.assert().success().stdout(
        predicate::str::contains("fetch-categories")
            .and(predicate::str::contains("fetch-recipes"))
            .and(predicate::str::contains("fetch-category"))
            .and(predicate::str::contains("auto-categorize-recipes"))
            .and(predicate::str::contains("populate-categories"))
            .and(predicate::str::contains("auto-tag")),
    );
}

#[test]
fn test_fetch_category_requires_id_or_slug() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = toolkit_cmd(temp_dir.path(), "http://127.0.0.1:9");
    cmd.arg("fetch-category");

    cmd.assert().failure();
}

#[test]
fn test_populate_with_missing_file_exits_with_error() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("no-such-file.txt");

    let mut cmd = toolkit_cmd(temp_dir.path(), "http://127.0.0.1:9");
    cmd.arg("populate-categories")
        .arg("--file")
        .arg(missing.to_str().unwrap());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: File not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_categories_prints_listing_and_writes_log() {
    // --- 1. Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/organizers/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": 1, "name": "Dessert", "slug": "dessert"},
                {"id": 2, "name": "Soup", "slug": "soup"}
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;
    let temp_dir = tempdir().unwrap();

    // --- 2. Act ---
    let mut cmd = toolkit_cmd(temp_dir.path(), &server.uri());
    cmd.arg("fetch-categories");

    // --- 3. Assert ---
    cmd.assert().success().stdout(
        predicate::str::contains("Found 2 categories:")
            .and(predicate::str::contains("  - Dessert (ID: 1)"))
            .and(predicate::str::contains("  - Soup (ID: 2)")),
    );
    assert!(temp_dir.path().join("mealie-toolkit.log").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_populate_creates_categories_from_file() {
    let server = MockServer::start().await;
    for name in ["Breakfast", "Dinner"] {
        Mock::given(method("POST"))
            .and(path("/api/organizers/categories"))
            .and(body_json(json!({"name": name})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 7,
                "name": name,
                "slug": name.to_lowercase()
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    let temp_dir = tempdir().unwrap();
    let file_path = temp_dir.path().join("categories.txt");
    fs::write(&file_path, "Breakfast\n\nDinner\n").unwrap();

    let mut cmd = toolkit_cmd(temp_dir.path(), &server.uri());
    cmd.arg("populate-categories")
        .arg("--file")
        .arg(file_path.to_str().unwrap());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Results: 2/2 categories created"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_auto_categorize_reports_skips_and_honours_decline() {
    // --- 1. Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/organizers/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": 1, "name": "Dessert", "slug": "dessert"}],
            "total": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "name": "Old Pie",
                    "slug": "old-pie",
                    "recipeCategory": [{"id": 1, "name": "Dessert", "slug": "dessert"}]
                },
                {"name": "Choco Cake", "slug": "choco-cake", "recipeCategory": []}
            ],
            "total": 2
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Dessert"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let temp_dir = tempdir().unwrap();

    // --- 2. Act ---
    let mut cmd = toolkit_cmd(temp_dir.path(), &server.uri());
    cmd.env("OLLAMA_URL", server.uri())
        .arg("auto-categorize-recipes")
        .write_stdin("no\n");

    // --- 3. Assert ---
    cmd.assert().success().stdout(
        predicate::str::contains("Skipped 1 already categorized, 0 failed")
            .and(predicate::str::contains("Choco Cake -> Dessert"))
            .and(predicate::str::contains("Categorization cancelled.")),
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_auto_tag_counts_failed_model_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Garden Salad", "slug": "garden-salad"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .expect(1)
        .mount(&server)
        .await;
    let temp_dir = tempdir().unwrap();

    let mut cmd = toolkit_cmd(temp_dir.path(), &server.uri());
    cmd.env("OLLAMA_URL", server.uri())
        .arg("auto-tag")
        .arg("--tag")
        .arg("vegetarian");

    cmd.assert().success().stdout(
        predicate::str::contains("0 matched, 1 failed")
            .and(predicate::str::contains("No recipes matched the tag.")),
    );
}
