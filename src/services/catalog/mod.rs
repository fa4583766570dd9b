//! Cocktail catalog abstraction
//!
//! The recommendation service only sees this trait; the HTTP implementation
//! lives in [`cocktaildb`]. Every method is a single request/response call
//! returning recipes already adapted into the slot-list model.

use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::{AttributeKind, Recipe, RecipeCollection},
};

pub mod cocktaildb;

pub use cocktaildb::CocktailDbClient;

/// Letters searched, in order, to assemble the full catalog
pub const CATALOG_LETTERS: std::ops::RangeInclusive<char> = 'a'..='z';

/// Trait for cocktail catalog backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// All known values of a categorical attribute, sorted
    async fn list_distinct(&self, attribute: AttributeKind) -> AppResult<Vec<String>>;

    /// Recipes whose name starts with `letter`; an empty result is valid
    async fn search_by_letter(&self, letter: char) -> AppResult<Vec<Recipe>>;

    /// Identifiers of recipes using ANY of the given canonical ingredients
    async fn filter_by_ingredients(
        &self,
        canonical_names: &BTreeSet<String>,
    ) -> AppResult<Vec<String>>;

    /// Full recipe for an identifier
    async fn lookup(&self, id: &str) -> AppResult<Option<Recipe>>;

    async fn fetch_random(&self) -> AppResult<Option<Recipe>>;

    async fn fetch_latest(&self) -> AppResult<Vec<Recipe>>;

    async fn fetch_popular(&self) -> AppResult<Vec<Recipe>>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Validates and lowercases a catalog search letter
pub fn search_letter(letter: char) -> AppResult<char> {
    let lower = letter.to_ascii_lowercase();
    if CATALOG_LETTERS.contains(&lower) {
        Ok(lower)
    } else {
        Err(AppError::InvalidInput(format!(
            "Search letter must be a-z, got '{}'",
            letter
        )))
    }
}

/// Assembles the full catalog by searching every letter once, in order
///
/// Results are concatenated as-is; the same recipe may appear twice if the
/// backend returns it for more than one letter.
pub async fn fetch_all_by_letter(client: &dyn CatalogClient) -> AppResult<RecipeCollection> {
    let mut recipes = Vec::new();

    for letter in CATALOG_LETTERS {
        let batch = client.search_by_letter(letter).await?;
        tracing::debug!(letter = %letter, results = batch.len(), "Letter search completed");
        recipes.extend(batch);
    }

    tracing::info!(
        provider = client.name(),
        recipes = recipes.len(),
        "Catalog assembled"
    );

    Ok(recipes)
}

/// Resolves identifiers into recipes one at a time, skipping unknown ids
pub async fn lookup_all(client: &dyn CatalogClient, ids: &[String]) -> AppResult<RecipeCollection> {
    let mut recipes = Vec::with_capacity(ids.len());

    for id in ids {
        match client.lookup(id).await? {
            Some(recipe) => recipes.push(recipe),
            None => tracing::warn!(id = %id, "Catalog returned no recipe for id"),
        }
    }

    Ok(recipes)
}
