//! # Shared Constants
//!
//! Defaults and fixed API paths shared by the library and the CLI.

pub const DEFAULT_MEALIE_URL: &str = "https://demo.mealie.io";

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

pub const DEFAULT_OLLAMA_MODEL: &str = "gemma3:12b";

/// Items requested per page when walking a paginated collection.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Upper bound on a single model completion, in seconds.
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;

/// How many ingredient names are included in a tag-check prompt.
pub const MAX_PROMPT_INGREDIENTS: usize = 15;

pub const CATEGORIES_PATH: &str = "/api/organizers/categories";
pub const TAGS_PATH: &str = "/api/organizers/tags";
pub const RECIPES_PATH: &str = "/api/recipes";
pub const OLLAMA_GENERATE_PATH: &str = "/api/generate";
