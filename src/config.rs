use serde::Deserialize;
use std::time::Duration;

use crate::services::matching::EmptyRecipePolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Cocktail catalog API base URL (without the key segment)
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Cocktail catalog API key; "1" is the public test key
    #[serde(default = "default_catalog_api_key")]
    pub catalog_api_key: String,

    /// Per-request timeout for catalog calls, in seconds
    #[serde(default = "default_catalog_timeout_secs")]
    pub catalog_timeout_secs: u64,

    /// Whether a recipe with no ingredients counts as fully makeable
    #[serde(default = "default_empty_recipes_makeable")]
    pub empty_recipes_makeable: bool,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_api_url() -> String {
    "https://www.thecocktaildb.com/api/json/v1".to_string()
}

fn default_catalog_api_key() -> String {
    "1".to_string()
}

fn default_catalog_timeout_secs() -> u64 {
    10
}

fn default_empty_recipes_makeable() -> bool {
    true
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_secs)
    }

    pub fn empty_recipe_policy(&self) -> EmptyRecipePolicy {
        if self.empty_recipes_makeable {
            EmptyRecipePolicy::Makeable
        } else {
            EmptyRecipePolicy::NotMakeable
        }
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
