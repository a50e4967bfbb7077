//! # Recipe-Server Records
//!
//! Typed records for everything exchanged with the recipe server, plus the
//! ephemeral proposals built by the pipelines. Raw response shapes are decoded
//! into these types once, at the gateway boundary.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A server-assigned identifier.
///
/// Mealie hands out UUID strings, but numeric ids are accepted as well and
/// re-encoded in the form they arrived in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{n}"),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        ResourceId::Text(value.to_string())
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A recipe category. Its `name` is the key model answers are matched against.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: ResourceId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

/// A recipe tag. Any extra fields the server sends are kept so the tag can be
/// sent back as a complete object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: ResourceId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The food an ingredient line refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One entry of a recipe's ingredient list.
///
/// Older recipes may hold plain strings or other non-object entries here;
/// those are kept as `Unstructured` and contribute no ingredient name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RecipeIngredient {
    Structured {
        #[serde(default)]
        ingredient: Option<IngredientRef>,
    },
    Unstructured(Value),
}

impl RecipeIngredient {
    /// The ingredient name, if the entry carries a non-empty one.
    pub fn name(&self) -> Option<&str> {
        match self {
            RecipeIngredient::Structured {
                ingredient: Some(food),
            } if !food.name.is_empty() => Some(food.name.as_str()),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipe_category: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipe_ingredient: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn is_categorized(&self) -> bool {
        !self.recipe_category.is_empty()
    }

    /// Names of the recipe's ingredients, in recipe order, skipping entries
    /// without a name.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.recipe_ingredient.iter().filter_map(RecipeIngredient::name)
    }
}

/// The two shapes a collection endpoint may answer with.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PageResponse<T> {
    /// `{ "items": [...], "total": N }`
    Paginated {
        items: Vec<T>,
        #[serde(default)]
        total: u64,
    },
    /// A bare JSON array: the whole collection in one response.
    Bare(Vec<T>),
}

impl<T> PageResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            PageResponse::Paginated { items, .. } => items,
            PageResponse::Bare(items) => items,
        }
    }
}

/// A category reference in a recipe PATCH body: either a full category,
/// sent as `{id, name, slug}`, or a bare id, sent as `{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRef {
    Full(Category),
    Id(ResourceId),
}

#[derive(Serialize)]
struct IdOnly<'a> {
    id: &'a ResourceId,
}

impl Serialize for CategoryRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategoryRef::Full(category) => category.serialize(serializer),
            CategoryRef::Id(id) => IdOnly { id }.serialize(serializer),
        }
    }
}

impl From<Category> for CategoryRef {
    fn from(category: Category) -> Self {
        CategoryRef::Full(category)
    }
}

impl From<ResourceId> for CategoryRef {
    fn from(id: ResourceId) -> Self {
        CategoryRef::Id(id)
    }
}

/// A proposed category assignment awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub recipe_name: String,
    pub recipe_slug: String,
    pub category_name: String,
    /// Always drawn from the category set fetched at pipeline start.
    pub category: Category,
}

/// A recipe the model judged to match a tag, awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub recipe_name: String,
    pub recipe_slug: String,
}
