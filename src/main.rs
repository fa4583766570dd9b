use std::sync::Arc;

use mixwiz_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{catalog::CocktailDbClient, recommendations::RecommendationService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mixwiz_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let catalog = CocktailDbClient::new(
        config.catalog_api_url.clone(),
        config.catalog_api_key.clone(),
        config.catalog_timeout(),
    )?;

    tracing::info!(
        catalog_url = %config.catalog_api_url,
        timeout_secs = config.catalog_timeout_secs,
        empty_recipe_policy = ?config.empty_recipe_policy(),
        "Catalog client configured"
    );

    let recommendations = RecommendationService::new(Arc::new(catalog), config.empty_recipe_policy());
    let app = create_router(Arc::new(AppState::new(recommendations)));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
