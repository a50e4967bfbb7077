//! # Command Handlers
//!
//! One handler per subcommand. Each builds the components it needs from the
//! resolved `ToolkitConfig` and reports progress on stdout.

use crate::{AutoCategorizeArgs, AutoTagArgs, Commands, FetchCategoryArgs, PopulateArgs};
use anyhow::{bail, Result};
use mealie_toolkit::display::{format_categories, format_category, format_recipes};
use mealie_toolkit::pipeline::{
    auto_categorize_recipes, auto_tag_recipes, populate_categories, PromptConfirmation,
};
use mealie_toolkit::{MealieClient, OllamaProvider, SuggestionOracle, ToolkitConfig};
use std::sync::Arc;
use tracing::info;

pub async fn run(command: &Commands, config: &ToolkitConfig) -> Result<()> {
    let client = MealieClient::new(config)?;

    match command {
        Commands::FetchCategories => handle_fetch_categories(&client).await,
        Commands::FetchRecipes => handle_fetch_recipes(&client).await,
        Commands::FetchCategory(args) => handle_fetch_category(&client, args).await,
        Commands::AutoCategorizeRecipes(args) => {
            handle_auto_categorize(&client, config, args).await
        }
        Commands::PopulateCategories(args) => handle_populate(&client, args).await,
        Commands::AutoTag(args) => handle_auto_tag(&client, config, args).await,
    }
}

fn build_oracle(config: &ToolkitConfig) -> Result<SuggestionOracle> {
    let provider = OllamaProvider::from_config(config)?;
    info!(
        "Using Ollama model '{}' at {}",
        provider.model(),
        config.ollama_url
    );
    Ok(SuggestionOracle::new(Arc::new(provider)))
}

async fn handle_fetch_categories(client: &MealieClient) -> Result<()> {
    println!("Fetching categories from {}...", client.base_url());
    let categories = client.fetch_categories().await?;
    print!("{}", format_categories(&categories));
    Ok(())
}

async fn handle_fetch_recipes(client: &MealieClient) -> Result<()> {
    println!("Fetching recipes from {}...", client.base_url());
    let recipes = client.fetch_recipes().await?;
    print!("{}", format_recipes(&recipes));
    Ok(())
}

async fn handle_fetch_category(client: &MealieClient, args: &FetchCategoryArgs) -> Result<()> {
    let category = match (&args.id, &args.slug) {
        (Some(id), _) => client.fetch_category_by_id(id).await?,
        (None, Some(slug)) => client.fetch_category_by_slug(slug).await?,
        (None, None) => bail!("Either --id or --slug is required."),
    };
    print!("{}", format_category(&category));
    Ok(())
}

async fn handle_auto_categorize(
    client: &MealieClient,
    config: &ToolkitConfig,
    args: &AutoCategorizeArgs,
) -> Result<()> {
    println!("Auto-categorizing recipes from {}...", client.base_url());
    let oracle = build_oracle(config)?;
    let mut confirmation = PromptConfirmation::stdin();
    let outcome = auto_categorize_recipes(client, &oracle, &mut confirmation, args.limit).await?;
    info!(?outcome, "Categorization finished");
    Ok(())
}

async fn handle_populate(client: &MealieClient, args: &PopulateArgs) -> Result<()> {
    println!("Populating categories from file...");
    let report = populate_categories(client, &args.file).await?;
    info!(
        created = report.created,
        total = report.total,
        "Category population finished"
    );
    Ok(())
}

async fn handle_auto_tag(
    client: &MealieClient,
    config: &ToolkitConfig,
    args: &AutoTagArgs,
) -> Result<()> {
    println!(
        "Auto-tagging recipes with '{}' tag from {}...",
        args.tag,
        client.base_url()
    );
    let oracle = build_oracle(config)?;
    let mut confirmation = PromptConfirmation::stdin();
    let outcome =
        auto_tag_recipes(client, &oracle, &mut confirmation, &args.tag, args.limit).await?;
    info!(?outcome, tag = %args.tag, "Tagging finished");
    Ok(())
}
