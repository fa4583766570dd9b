use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;

use mixwiz_api::{
    error::AppResult,
    models::{AttributeKind, Recipe},
    routes::{create_router, AppState},
    services::{
        catalog::CatalogClient, matching::EmptyRecipePolicy,
        recommendations::RecommendationService,
    },
};

/// Catalog backed by a fixed list of recipes
struct InMemoryCatalog {
    recipes: Vec<Recipe>,
}

#[async_trait::async_trait]
impl CatalogClient for InMemoryCatalog {
    async fn list_distinct(&self, attribute: AttributeKind) -> AppResult<Vec<String>> {
        let values: BTreeSet<String> = self
            .recipes
            .iter()
            .flat_map(|recipe| match attribute {
                AttributeKind::Ingredient => recipe
                    .slots
                    .iter()
                    .filter_map(|slot| slot.display_name().map(str::to_string))
                    .collect::<Vec<_>>(),
                AttributeKind::Glass => recipe.glass.clone().into_iter().collect(),
                AttributeKind::Category => recipe.category.clone().into_iter().collect(),
                AttributeKind::Alcohol => recipe.alcoholic.clone().into_iter().collect(),
            })
            .collect();
        Ok(values.into_iter().collect())
    }

    async fn search_by_letter(&self, letter: char) -> AppResult<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.name.to_lowercase().starts_with(letter))
            .cloned()
            .collect())
    }

    async fn filter_by_ingredients(
        &self,
        canonical_names: &BTreeSet<String>,
    ) -> AppResult<Vec<String>> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| {
                mixwiz_api::services::ingredients::extract_ingredients(recipe)
                    .iter()
                    .any(|name| canonical_names.contains(name))
            })
            .map(|recipe| recipe.id.clone())
            .collect())
    }

    async fn lookup(&self, id: &str) -> AppResult<Option<Recipe>> {
        Ok(self.recipes.iter().find(|recipe| recipe.id == id).cloned())
    }

    async fn fetch_random(&self) -> AppResult<Option<Recipe>> {
        Ok(self.recipes.first().cloned())
    }

    async fn fetch_latest(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.recipes.iter().rev().cloned().collect())
    }

    async fn fetch_popular(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("11000", "Lemon Screwdriver")
            .with_glass("Highball glass")
            .with_category("Ordinary Drink")
            .with_alcoholic("Alcoholic")
            .with_ingredient("Lemon Vodka", None)
            .with_ingredient("Triple Sec", None)
            .with_ingredient("Orange Juice", Some("3 oz")),
        Recipe::new("11001", "Vodka Soda")
            .with_glass("Cocktail glass")
            .with_category("Ordinary Drink")
            .with_alcoholic("Alcoholic")
            .with_ingredient("Lemon Vodka", Some("2 oz"))
            .with_ingredient("Soda Water", None),
        Recipe::new("12000", "Orange Fizz")
            .with_category("Soft Drink")
            .with_alcoholic("Non alcoholic")
            .with_ingredient("Orange Juice", None)
            .with_ingredient("Soda Water", None),
    ]
}

fn create_test_server() -> TestServer {
    let catalog = InMemoryCatalog {
        recipes: sample_recipes(),
    };
    let service = RecommendationService::new(Arc::new(catalog), EmptyRecipePolicy::Makeable);
    let app = create_router(Arc::new(AppState::new(service)));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "5f0c5a4e-3b1f-4c7a-9d59-3f3f8a1f2b6e";

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;

    let echoed = response.headers().get("x-request-id").unwrap();
    assert_eq!(echoed.to_str().unwrap(), id);
}

#[tokio::test]
async fn test_vocabulary_lists_sorted_values() {
    let server = create_test_server();

    let response = server.get("/api/v1/vocabulary/glass").await;
    response.assert_status_ok();
    let glasses: Vec<String> = response.json();
    assert_eq!(glasses, vec!["Cocktail glass", "Highball glass"]);
}

#[tokio::test]
async fn test_vocabulary_unknown_attribute() {
    let server = create_test_server();
    let response = server.get("/api/v1/vocabulary/garnish").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_fully_makeable() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/cocktails/search")
        .json(&json!({
            "ingredients": ["Lemon Vodka", "Triple Sec", "Orange Juice"],
            "mode": "fully_makeable"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["cocktails"][0]["id"], "11000");
    assert_eq!(body["cocktails"][0]["missing_count"], 0);
    assert_eq!(body["cocktails"][0]["instructions"], "No instructions available.");
}

#[tokio::test]
async fn test_search_ranked_with_filters() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/cocktails/search")
        .json(&json!({
            "ingredients": ["lemon vodka"],
            "mode": "ranked_by_missing_count",
            "filters": { "category": "Ordinary Drink" }
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cocktails = body["cocktails"].as_array().unwrap();
    assert_eq!(cocktails.len(), 2);
    assert_eq!(cocktails[0]["id"], "11001");
    assert_eq!(cocktails[1]["missing"], json!(["Triple Sec", "Orange Juice"]));
}

#[tokio::test]
async fn test_search_ingredient_filter_source() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/cocktails/search")
        .json(&json!({
            "ingredients": ["Soda Water"],
            "mode": "any_overlap",
            "source": "ingredient_filter"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["source"], "ingredient_filter");
}

#[tokio::test]
async fn test_search_without_ingredients_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/cocktails/search")
        .json(&json!({ "mode": "any_overlap" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Please select at least one ingredient");
}

#[tokio::test]
async fn test_search_unfiltered_popular() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/cocktails/search")
        .json(&json!({ "mode": "unfiltered", "source": "popular" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_pick_with_seed_is_reproducible() {
    let server = create_test_server();
    let request = json!({
        "ingredients": ["Orange Juice", "Soda Water", "Lemon Vodka"],
        "mode": "any_overlap",
        "seed": 2024
    });

    let first: serde_json::Value = server
        .post("/api/v1/cocktails/pick")
        .json(&request)
        .await
        .json();
    let second: serde_json::Value = server
        .post("/api/v1/cocktails/pick")
        .json(&request)
        .await
        .json();

    assert_eq!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_pick_without_match_is_not_found() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/cocktails/pick")
        .json(&json!({ "ingredients": ["Gin"] }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_cocktail_annotates_missing() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/cocktails/random")
        .add_query_param("ingredients", "Orange Juice,Triple Sec")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Lemon Screwdriver");
    assert_eq!(body["missing"], json!(["Lemon Vodka"]));
}
