use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::AttributeKind,
    routes::AppState,
};

/// Handler listing every known value of an attribute
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(attribute): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let attribute: AttributeKind = attribute.parse().map_err(AppError::InvalidInput)?;
    let values = state.recommendations.vocabulary(attribute).await?;
    Ok(Json(values))
}
