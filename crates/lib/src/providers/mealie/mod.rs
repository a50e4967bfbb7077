//! # Mealie Gateway
//!
//! Typed operations against a Mealie recipe server. Every response is decoded
//! into the records in `crate::types` here, so nothing downstream ever looks at
//! raw JSON.

pub mod pagination;

use crate::{
    config::ToolkitConfig,
    constants::{CATEGORIES_PATH, RECIPES_PATH, TAGS_PATH},
    errors::ToolkitError,
    providers::http::decode_json,
    types::{Category, CategoryRef, PageResponse, Recipe, Tag},
};
use pagination::fetch_all_pages;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

/// The client for making API calls to a Mealie instance.
#[derive(Clone, Debug)]
pub struct MealieClient {
    client: ReqwestClient,
    base_url: String,
    api_token: Option<String>,
    page_size: u32,
}

#[derive(Serialize)]
struct CreateCategoryRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeCategoryPatch<'a> {
    recipe_category: &'a [CategoryRef],
}

#[derive(Serialize)]
struct RecipeTagsPatch<'a> {
    tags: &'a [Tag],
}

impl MealieClient {
    /// Creates a new `MealieClient`. Requests rely on the transport's default
    /// timeouts.
    pub fn new(config: &ToolkitConfig) -> Result<Self, ToolkitError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ToolkitError::ClientBuild)?;
        Ok(Self {
            client,
            base_url: config.mealie_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            page_size: config.page_size,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request for `path`, adding the bearer token when one is configured.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request_builder = self.client.request(method, url);
        if let Some(token) = &self.api_token {
            request_builder = request_builder.bearer_auth(token);
        }
        request_builder
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ToolkitError> {
        let response = self.request(Method::GET, path).send().await?;
        decode_json(response, path).await
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
    ) -> Result<PageResponse<T>, ToolkitError> {
        let response = self
            .request(Method::GET, path)
            .query(&[("page", page), ("pageSize", self.page_size)])
            .send()
            .await?;
        decode_json(response, path).await
    }

    async fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ToolkitError> {
        fetch_all_pages(|page| self.get_page(path, page)).await
    }

    /// Fetches every category, following pagination.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ToolkitError> {
        info!("Fetching categories from: {}{}", self.base_url, CATEGORIES_PATH);
        let categories: Vec<Category> = self.fetch_all(CATEGORIES_PATH).await?;
        info!("Fetched {} categories.", categories.len());
        Ok(categories)
    }

    pub async fn fetch_category_by_id(&self, id: &str) -> Result<Category, ToolkitError> {
        self.get_json(&format!("{CATEGORIES_PATH}/{id}")).await
    }

    pub async fn fetch_category_by_slug(&self, slug: &str) -> Result<Category, ToolkitError> {
        self.get_json(&format!("{CATEGORIES_PATH}/slug/{slug}")).await
    }

    /// Fetches every recipe, following pagination.
    pub async fn fetch_recipes(&self) -> Result<Vec<Recipe>, ToolkitError> {
        info!("Fetching recipes from: {}{}", self.base_url, RECIPES_PATH);
        let recipes: Vec<Recipe> = self.fetch_all(RECIPES_PATH).await?;
        info!("Fetched {} recipes.", recipes.len());
        Ok(recipes)
    }

    /// Fetches the tag list with a single, unpaged request.
    pub async fn fetch_tags(&self) -> Result<Vec<Tag>, ToolkitError> {
        let tags: PageResponse<Tag> = self.get_json(TAGS_PATH).await?;
        Ok(tags.into_items())
    }

    /// Creates a category and returns it with its server-assigned id.
    pub async fn create_category(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category, ToolkitError> {
        let payload = CreateCategoryRequest {
            name,
            description: description.filter(|d| !d.is_empty()),
        };
        let response = self
            .request(Method::POST, CATEGORIES_PATH)
            .json(&payload)
            .send()
            .await?;
        decode_json(response, "created category").await
    }

    /// Replaces the recipe's category list with `categories`.
    pub async fn update_recipe_categories(
        &self,
        recipe_slug: &str,
        categories: &[CategoryRef],
    ) -> Result<Recipe, ToolkitError> {
        let payload = RecipeCategoryPatch {
            recipe_category: categories,
        };
        self.patch_recipe(recipe_slug, &payload).await
    }

    /// Sets the recipe's tags to the single tag named `tag_name`.
    ///
    /// The name is matched case-insensitively against the live tag list; an
    /// unknown name is a validation error. The recipe's previous tags are
    /// replaced, not merged, so callers wanting several tags on one recipe
    /// must assemble that set themselves.
    pub async fn add_recipe_tag(
        &self,
        recipe_slug: &str,
        tag_name: &str,
    ) -> Result<Recipe, ToolkitError> {
        let tags = self.fetch_tags().await?;
        let wanted = tag_name.to_lowercase();
        let tag = tags
            .into_iter()
            .find(|t| t.name.to_lowercase() == wanted)
            .ok_or_else(|| {
                ToolkitError::Validation(format!("Tag '{tag_name}' not found in Mealie instance"))
            })?;

        let payload = RecipeTagsPatch {
            tags: std::slice::from_ref(&tag),
        };
        self.patch_recipe(recipe_slug, &payload).await
    }

    async fn patch_recipe<B: Serialize>(
        &self,
        recipe_slug: &str,
        payload: &B,
    ) -> Result<Recipe, ToolkitError> {
        let path = format!("{RECIPES_PATH}/{recipe_slug}");
        let response = self
            .request(Method::PATCH, &path)
            .json(payload)
            .send()
            .await?;
        decode_json(response, "updated recipe").await
    }
}
