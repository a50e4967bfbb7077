use async_trait::async_trait;
use mealie_toolkit::errors::ToolkitError;
use mealie_toolkit::providers::ai::AiProvider;
use mealie_toolkit::{MealieClient, ToolkitConfig};
use serde_json::{json, Value};
use std::fmt::Debug;
use std::sync::{Arc, Mutex, Once};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initializes tracing once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// --- Mock AI Provider ---

#[derive(Clone, Debug)]
enum Scripted {
    Answer(String),
    Failure(String),
}

/// An `AiProvider` with pre-programmed answers.
///
/// Answers are keyed by a substring of the prompt (a recipe name works well).
/// Prompts matching no key get the default answer, or an error if none is set.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    responses: Arc<Mutex<Vec<(String, Scripted)>>>,
    default: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `response` to any prompt containing `key`.
    pub fn add_response(&self, key: &str, response: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push((key.to_string(), Scripted::Answer(response.to_string())));
        self
    }

    /// Fails with a transport error for any prompt containing `key`.
    pub fn add_failure(&self, key: &str, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push((key.to_string(), Scripted::Failure(message.to_string())));
        self
    }

    pub fn set_default(&self, response: &str) -> &Self {
        *self.default.lock().unwrap() = Some(response.to_string());
        self
    }

    /// Every prompt received, in order.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many prompts mentioned `needle`.
    pub fn calls_mentioning(&self, needle: &str) -> usize {
        self.get_calls()
            .iter()
            .filter(|prompt| prompt.contains(needle))
            .count()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ToolkitError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let scripted = self
            .responses
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| prompt.contains(key.as_str()))
            .map(|(_, scripted)| scripted.clone());

        match scripted {
            Some(Scripted::Answer(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(ToolkitError::Transport {
                status: None,
                message,
            }),
            None => self.default.lock().unwrap().clone().ok_or_else(|| {
                ToolkitError::Semantic(format!(
                    "MockAiProvider: No response programmed for prompt. Got: '{prompt}'"
                ))
            }),
        }
    }
}

// --- Mock Mealie Server ---

/// A wiremock server standing in for a Mealie instance.
pub struct MockMealie {
    pub server: MockServer,
}

impl MockMealie {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> ToolkitConfig {
        ToolkitConfig::new(&self.server.uri(), "http://127.0.0.1:9")
    }

    pub fn client(&self) -> MealieClient {
        MealieClient::new(&self.config()).expect("Failed to build MealieClient")
    }

    /// Serves `body` for `GET path`, whatever the query string.
    pub async fn mount_get(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_categories(&self, categories: Value) {
        let total = categories.as_array().map_or(0, Vec::len);
        self.mount_get(
            "/api/organizers/categories",
            json!({ "items": categories, "total": total }),
        )
        .await;
    }

    pub async fn mount_recipes(&self, recipes: Value) {
        let total = recipes.as_array().map_or(0, Vec::len);
        self.mount_get("/api/recipes", json!({ "items": recipes, "total": total }))
            .await;
    }

    pub async fn mount_tags(&self, tags: Value) {
        self.mount_get("/api/organizers/tags", json!({ "items": tags }))
            .await;
    }
}

// --- Fixtures ---

pub fn category_json(id: i64, name: &str, slug: &str) -> Value {
    json!({ "id": id, "name": name, "slug": slug })
}

pub fn tag_json(id: &str, name: &str, slug: &str) -> Value {
    json!({ "id": id, "name": name, "slug": slug, "groupId": "group-1" })
}

pub fn recipe_json(name: &str, slug: &str, categories: Value) -> Value {
    json!({
        "id": format!("id-{slug}"),
        "name": name,
        "slug": slug,
        "recipeCategory": categories,
        "tags": [],
        "description": "",
        "recipeIngredient": []
    })
}
