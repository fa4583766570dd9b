use std::sync::Arc;
use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    models::{
        AttributeKind, CatalogSource, CocktailCard, RecipeCollection, RecommendationQuery,
        RecommendationResponse, UserIngredientSet,
    },
    services::{
        catalog::{fetch_all_by_letter, lookup_all, CatalogClient},
        filters::apply_filters,
        matching::{apply_mode, EmptyRecipePolicy},
        selection::{policy_for_seed, select},
    },
};

/// Message returned when nothing qualifies for a pick
pub const NO_MATCH_MESSAGE: &str = "Sorry, no cocktails can be made with those ingredients";

/// Cocktail recommendations over a catalog backend
///
/// Each query fetches a fresh collection, applies the requested match mode
/// and then the attribute filters, and returns the whole qualifying set. Picking a
/// single cocktail is a separate step driven by a selection policy.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn CatalogClient>,
    empty_recipe_policy: EmptyRecipePolicy,
}

impl RecommendationService {
    pub fn new(catalog: Arc<dyn CatalogClient>, empty_recipe_policy: EmptyRecipePolicy) -> Self {
        Self {
            catalog,
            empty_recipe_policy,
        }
    }

    /// Known values of an attribute, for building selection lists
    pub async fn vocabulary(&self, attribute: AttributeKind) -> AppResult<Vec<String>> {
        self.catalog.list_distinct(attribute).await
    }

    /// All cocktails qualifying for the query, in match order
    pub async fn recommend(&self, query: &RecommendationQuery) -> AppResult<RecommendationResponse> {
        let start = Instant::now();
        let user: UserIngredientSet = query.ingredients.iter().collect();

        if query.mode.uses_ingredients() && user.is_empty() {
            return Err(AppError::InvalidInput(
                "Please select at least one ingredient".to_string(),
            ));
        }

        tracing::info!(
            mode = ?query.mode,
            source = ?query.source,
            ingredients = user.len(),
            "Starting recommendation"
        );

        let collection = self.fetch_source(query.source, &user).await?;
        let matched = apply_mode(query.mode, &collection, &user, self.empty_recipe_policy);
        let kept = apply_filters(&matched, &query.filters);

        let cocktails: Vec<CocktailCard> = kept
            .iter()
            .map(|recipe| CocktailCard::new(recipe, &user))
            .collect();

        tracing::info!(
            fetched = collection.len(),
            matched = matched.len(),
            returned = cocktails.len(),
            processing_time_ms = start.elapsed().as_millis(),
            "Recommendation completed"
        );

        Ok(RecommendationResponse {
            mode: query.mode,
            source: query.source,
            total: cocktails.len(),
            cocktails,
        })
    }

    /// One cocktail chosen from the qualifying set
    ///
    /// Uses a seeded choice when the query carries a seed, otherwise a
    /// uniformly random one.
    pub async fn pick(&self, query: &RecommendationQuery) -> AppResult<CocktailCard> {
        let response = self.recommend(query).await?;
        let policy = policy_for_seed(query.seed);

        let chosen = select(policy.as_ref(), &response.cocktails)
            .cloned()
            .ok_or_else(|| AppError::NotFound(NO_MATCH_MESSAGE.to_string()))?;

        tracing::info!(
            policy = policy.name(),
            candidates = response.total,
            cocktail = %chosen.name,
            "Cocktail picked"
        );

        Ok(chosen)
    }

    /// A random cocktail from the catalog, annotated against `user`
    pub async fn random_cocktail(&self, user: &UserIngredientSet) -> AppResult<CocktailCard> {
        let recipe = self
            .catalog
            .fetch_random()
            .await?
            .ok_or_else(|| AppError::NotFound("Catalog returned no random cocktail".to_string()))?;

        Ok(CocktailCard::new(&recipe, user))
    }

    async fn fetch_source(
        &self,
        source: CatalogSource,
        user: &UserIngredientSet,
    ) -> AppResult<RecipeCollection> {
        let catalog = self.catalog.as_ref();

        match source {
            CatalogSource::Alphabet => fetch_all_by_letter(catalog).await,
            CatalogSource::IngredientFilter => {
                if user.is_empty() {
                    return Err(AppError::InvalidInput(
                        "Ingredient filter needs at least one ingredient".to_string(),
                    ));
                }
                let ids = catalog.filter_by_ingredients(user.as_set()).await?;
                lookup_all(catalog, &ids).await
            }
            CatalogSource::Popular => catalog.fetch_popular().await,
            CatalogSource::Latest => {
                let mut recipes = catalog.fetch_latest().await?;
                newest_first(&mut recipes);
                Ok(recipes)
            }
            CatalogSource::Random => Ok(catalog.fetch_random().await?.into_iter().collect()),
        }
    }
}

/// Stable sort by modification time, newest first; undated recipes go last
fn newest_first(recipes: &mut RecipeCollection) {
    recipes.sort_by(|a, b| b.date_modified.cmp(&a.date_modified));
}
