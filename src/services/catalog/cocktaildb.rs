//! TheCocktailDB catalog client
//!
//! All endpoints share one envelope, `{"drinks": [...]}`. The upstream uses
//! `null` for "no results" and, on the filter endpoint, the string
//! `"None Found"`; both are read as an empty list.
//!
//! API Flow:
//! 1. Vocabulary: /list.php?{i|g|c|a}=list → one field per entry
//! 2. Catalog: /search.php?f={letter} → full drink records
//! 3. Pre-filter: /filter.php?i={a,b} → partial records, resolved via /lookup.php?i={id}

use crate::{
    error::{AppError, AppResult},
    models::{ApiDrink, AttributeKind, Recipe},
    services::catalog::{search_letter, CatalogClient},
};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::{collections::BTreeSet, time::Duration};

const PROVIDER: &str = "thecocktaildb";

#[derive(Clone)]
pub struct CocktailDbClient {
    http_client: HttpClient,
    api_url: String,
    api_key: String,
}

impl CocktailDbClient {
    /// Creates a client with a per-request timeout
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
            api_key,
        })
    }

    /// Full URL for an endpoint, e.g. `.../json/v1/1/search.php`
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.api_key,
            path
        )
    }

    /// Query parameter and response field used to list an attribute
    fn list_spec(attribute: AttributeKind) -> (&'static str, &'static str) {
        match attribute {
            AttributeKind::Ingredient => ("i", "strIngredient1"),
            AttributeKind::Glass => ("g", "strGlass"),
            AttributeKind::Category => ("c", "strCategory"),
            AttributeKind::Alcohol => ("a", "strAlcoholic"),
        }
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> AppResult<Value> {
        let url = self.endpoint(path);

        let response = self.http_client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TheCocktailDB returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(path = %path, bytes = response_text.len(), "Raw catalog response");

        parse_body(&response_text)
    }
}

/// Decodes a response body; an empty body is read as no drinks
fn parse_body(text: &str) -> AppResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(text).map_err(|e| {
        tracing::error!(error = %e, "Failed to deserialize catalog response");
        AppError::ExternalApi(format!("Failed to parse catalog response: {}", e))
    })
}

/// Entries of the `drinks` envelope; anything but an array is empty
fn drink_entries(body: &Value) -> &[Value] {
    body.get("drinks")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Adapts every drink record, skipping entries without an id
fn parse_recipes(body: &Value) -> Vec<Recipe> {
    drink_entries(body)
        .iter()
        .filter_map(|entry| {
            let recipe = serde_json::from_value::<ApiDrink>(entry.clone())
                .ok()
                .and_then(|drink| drink.to_recipe());
            if recipe.is_none() {
                tracing::warn!(provider = PROVIDER, "Skipping malformed drink record");
            }
            recipe
        })
        .collect()
}

/// Drink identifiers from a filter response
fn parse_ids(body: &Value) -> Vec<String> {
    drink_entries(body)
        .iter()
        .filter_map(|entry| entry.get("idDrink").and_then(Value::as_str))
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Sorted, de-duplicated values of one field from a list response
fn parse_distinct(body: &Value, field: &str) -> Vec<String> {
    let values: BTreeSet<String> = drink_entries(body)
        .iter()
        .filter_map(|entry| entry.get(field).and_then(Value::as_str))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    values.into_iter().collect()
}

#[async_trait::async_trait]
impl CatalogClient for CocktailDbClient {
    async fn list_distinct(&self, attribute: AttributeKind) -> AppResult<Vec<String>> {
        let (param, field) = Self::list_spec(attribute);
        let body = self.get_json("list.php", &[(param, "list")]).await?;
        let values = parse_distinct(&body, field);

        tracing::info!(
            attribute = %attribute,
            results = values.len(),
            provider = PROVIDER,
            "Attribute values listed"
        );

        Ok(values)
    }

    async fn search_by_letter(&self, letter: char) -> AppResult<Vec<Recipe>> {
        let letter = search_letter(letter)?.to_string();
        let body = self.get_json("search.php", &[("f", letter.as_str())]).await?;
        Ok(parse_recipes(&body))
    }

    async fn filter_by_ingredients(
        &self,
        canonical_names: &BTreeSet<String>,
    ) -> AppResult<Vec<String>> {
        if canonical_names.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one ingredient is required to filter".to_string(),
            ));
        }

        let joined = canonical_names
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let body = self.get_json("filter.php", &[("i", joined.as_str())]).await?;
        let ids = parse_ids(&body);

        tracing::info!(
            ingredients = %joined,
            results = ids.len(),
            provider = PROVIDER,
            "Ingredient filter completed"
        );

        Ok(ids)
    }

    async fn lookup(&self, id: &str) -> AppResult<Option<Recipe>> {
        let body = self.get_json("lookup.php", &[("i", id)]).await?;
        Ok(parse_recipes(&body).into_iter().next())
    }

    async fn fetch_random(&self) -> AppResult<Option<Recipe>> {
        let body = self.get_json("random.php", &[]).await?;
        Ok(parse_recipes(&body).into_iter().next())
    }

    async fn fetch_latest(&self) -> AppResult<Vec<Recipe>> {
        let body = self.get_json("latest.php", &[]).await?;
        Ok(parse_recipes(&body))
    }

    async fn fetch_popular(&self) -> AppResult<Vec<Recipe>> {
        let body = self.get_json("popular.php", &[]).await?;
        Ok(parse_recipes(&body))
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
