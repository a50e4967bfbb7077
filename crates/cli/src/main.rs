//! # mealie-toolkit: A CLI for `mealie_toolkit`
//!
//! This is the main entry point for the `mealie-toolkit` command-line interface.

mod commands;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use mealie_toolkit::constants::{
    DEFAULT_MEALIE_URL, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_ORACLE_TIMEOUT_SECS,
};
use mealie_toolkit::ToolkitConfig;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "mealie-toolkit.log";

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about = "Sync recipe categories and tags between Mealie and Ollama", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
struct ConnectionArgs {
    /// Base URL of the Mealie instance
    #[arg(long, env = "MEALIE_URL", default_value = DEFAULT_MEALIE_URL, global = true)]
    mealie_url: String,
    /// API token for the Mealie instance
    #[arg(long, env = "MEALIE_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<String>,
    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL, global = true)]
    ollama_url: String,
    /// The Ollama model used for suggestions
    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_OLLAMA_MODEL, global = true)]
    ollama_model: String,
    /// Seconds to wait for a single model answer
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = DEFAULT_ORACLE_TIMEOUT_SECS, global = true)]
    ollama_timeout: u64,
}

impl ConnectionArgs {
    fn to_config(&self) -> ToolkitConfig {
        ToolkitConfig::new(&self.mealie_url, &self.ollama_url)
            .with_api_token(self.api_token.clone())
            .with_ollama_model(&self.ollama_model)
            .with_oracle_timeout(Duration::from_secs(self.ollama_timeout))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch all categories from the Mealie instance
    FetchCategories,
    /// Fetch all recipes from the Mealie instance
    FetchRecipes,
    /// Fetch a single category by ID or slug
    FetchCategory(FetchCategoryArgs),
    /// Auto-categorize recipes using Ollama AI suggestions
    AutoCategorizeRecipes(AutoCategorizeArgs),
    /// Populate categories from a file (one category per line)
    PopulateCategories(PopulateArgs),
    /// Auto-tag recipes based on a given tag (e.g., vegetarian, quick, spicy)
    AutoTag(AutoTagArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("lookup").required(true).args(["id", "slug"])))]
struct FetchCategoryArgs {
    /// The ID of the category
    #[arg(long)]
    id: Option<String>,
    /// The slug of the category
    #[arg(long)]
    slug: Option<String>,
}

#[derive(Parser, Debug)]
struct AutoCategorizeArgs {
    /// Limit the number of recipes to categorize (useful for debugging)
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser, Debug)]
struct PopulateArgs {
    /// Path to the file containing category names
    #[arg(long, required = true)]
    file: PathBuf,
}

#[derive(Parser, Debug)]
struct AutoTagArgs {
    /// The tag to check for (e.g., 'vegetarian', 'quick', 'spicy')
    #[arg(long, required = true)]
    tag: String,
    /// Limit the number of recipes to check (useful for debugging)
    #[arg(long)]
    limit: Option<usize>,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Log to a file so tracing output stays out of the interactive prompts.
    let log_file = File::create(LOG_FILE)?;
    let subscriber = fmt::Subscriber::builder()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = cli.connection.to_config();

    if let Err(e) = commands::run(&cli.command, &config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
