use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

pub mod recipe;
pub mod user_ingredients;

pub use recipe::{ApiDrink, IngredientSlot, Recipe, RecipeCollection, MAX_INGREDIENT_SLOTS};
pub use user_ingredients::UserIngredientSet;

use crate::services::{
    ingredients::display_ingredients,
    matching::{missing_count, missing_list},
};

/// Placeholder shown when a recipe carries no instructions
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// Categorical recipe attributes the catalog can enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Ingredient,
    Glass,
    Category,
    Alcohol,
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttributeKind::Ingredient => "ingredient",
            AttributeKind::Glass => "glass",
            AttributeKind::Category => "category",
            AttributeKind::Alcohol => "alcohol",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AttributeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredient" | "ingredients" => Ok(AttributeKind::Ingredient),
            "glass" => Ok(AttributeKind::Glass),
            "category" => Ok(AttributeKind::Category),
            "alcohol" | "alcoholic" => Ok(AttributeKind::Alcohol),
            other => Err(format!("Unknown attribute '{}'", other)),
        }
    }
}

/// Optional exact-match attribute filters, combined with AND
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeFilters {
    #[serde(default)]
    pub glass: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub alcohol: Option<String>,
}

impl AttributeFilters {
    pub fn glass(glass: &str) -> Self {
        Self {
            glass: Some(glass.to_string()),
            ..Default::default()
        }
    }

    pub fn category(category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    pub fn alcohol(alcohol: &str) -> Self {
        Self {
            alcohol: Some(alcohol.to_string()),
            ..Default::default()
        }
    }
}

/// How recipes are matched against the user's ingredients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every recipe ingredient is on hand
    #[default]
    FullyMakeable,
    /// At least one recipe ingredient is on hand
    AnyOverlap,
    /// All recipes, fewest missing ingredients first
    RankedByMissingCount,
    /// No ingredient matching at all
    Unfiltered,
}

impl MatchMode {
    /// Whether the mode looks at the user's ingredients
    pub fn uses_ingredients(&self) -> bool {
        !matches!(self, MatchMode::Unfiltered)
    }
}

/// Where the candidate recipes come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Full catalog assembled by searching every first letter
    #[default]
    Alphabet,
    /// Catalog-side pre-filter on any of the user's ingredients
    IngredientFilter,
    Popular,
    Latest,
    Random,
}

/// Request for cocktail recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationQuery {
    /// Ingredient display names as selected by the user
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub mode: MatchMode,
    #[serde(default)]
    pub source: CatalogSource,
    #[serde(default)]
    pub filters: AttributeFilters,
    /// Seed for reproducible selection when picking a single cocktail
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A recipe ingredient prepared for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayIngredient {
    pub name: String,
    pub measure: Option<String>,
    pub missing: bool,
}

/// A recipe rendered for the user, annotated with what they lack
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CocktailCard {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub instructions: String,
    pub glass: Option<String>,
    pub category: Option<String>,
    pub alcoholic: Option<String>,
    pub date_modified: Option<NaiveDateTime>,
    pub ingredients: Vec<DisplayIngredient>,
    /// Missing slots in display order; a repeated ingredient appears twice
    pub missing: Vec<String>,
    /// Distinct missing ingredients, the value ranking sorts by
    pub missing_count: usize,
}

impl CocktailCard {
    pub fn new(recipe: &Recipe, user: &UserIngredientSet) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            thumbnail: recipe.thumbnail.clone(),
            instructions: recipe
                .instructions
                .clone()
                .unwrap_or_else(|| NO_INSTRUCTIONS.to_string()),
            glass: recipe.glass.clone(),
            category: recipe.category.clone(),
            alcoholic: recipe.alcoholic.clone(),
            date_modified: recipe.date_modified,
            ingredients: display_ingredients(recipe, user),
            missing: missing_list(recipe, user),
            missing_count: missing_count(recipe, user),
        }
    }
}

/// Response with the entire qualifying set, in match order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub mode: MatchMode,
    pub source: CatalogSource,
    pub total: usize,
    pub cocktails: Vec<CocktailCard>,
}
