use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{CocktailCard, RecommendationQuery, RecommendationResponse, UserIngredientSet},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    /// Comma-separated ingredient names to annotate the cocktail against
    #[serde(default)]
    ingredients: Option<String>,
}

/// Handler returning every cocktail that qualifies for the query
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(query): Json<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        ingredients = query.ingredients.len(),
        "Processing cocktail search"
    );

    let response = state.recommendations.recommend(&query).await?;
    Ok(Json(response))
}

/// Handler choosing a single cocktail from the qualifying set
pub async fn pick(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(query): Json<RecommendationQuery>,
) -> AppResult<Json<CocktailCard>> {
    tracing::info!(
        request_id = %request_id,
        ingredients = query.ingredients.len(),
        seeded = query.seed.is_some(),
        "Processing cocktail pick"
    );

    let card = state.recommendations.pick(&query).await?;
    Ok(Json(card))
}

/// Handler for a random cocktail
pub async fn random(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomQuery>,
) -> AppResult<Json<CocktailCard>> {
    let user: UserIngredientSet = params
        .ingredients
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .collect();

    let card = state.recommendations.random_cocktail(&user).await?;
    Ok(Json(card))
}
