use crate::models::{MatchMode, Recipe, UserIngredientSet};
use crate::services::ingredients::{canonicalize, ingredient_set};

/// Whether a recipe with no ingredients counts as fully makeable
///
/// Catalog data occasionally carries drinks with every slot empty. Under
/// `Makeable` the empty set is vacuously a subset of anything the user has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyRecipePolicy {
    #[default]
    Makeable,
    NotMakeable,
}

/// Number of distinct recipe ingredients the user does not have
pub fn missing_count(recipe: &Recipe, user: &UserIngredientSet) -> usize {
    ingredient_set(recipe)
        .iter()
        .filter(|name| !user.contains(name))
        .count()
}

/// Display names of the recipe's slots the user lacks, in slot order
pub fn missing_list(recipe: &Recipe, user: &UserIngredientSet) -> Vec<String> {
    recipe
        .slots
        .iter()
        .filter_map(|slot| slot.display_name())
        .filter(|name| !user.contains(&canonicalize(name)))
        .map(str::to_string)
        .collect()
}

/// Whether every ingredient of the recipe is in `user`
pub fn is_fully_makeable(
    recipe: &Recipe,
    user: &UserIngredientSet,
    policy: EmptyRecipePolicy,
) -> bool {
    let needed = ingredient_set(recipe);
    if needed.is_empty() {
        return policy == EmptyRecipePolicy::Makeable;
    }
    needed.iter().all(|name| user.contains(name))
}

/// Whether at least one ingredient of the recipe is in `user`
pub fn has_overlap(recipe: &Recipe, user: &UserIngredientSet) -> bool {
    ingredient_set(recipe).iter().any(|name| user.contains(name))
}

/// Recipes the user can make with what they have
///
/// Recipes without ingredients are included; see [`fully_makeable_with`].
pub fn fully_makeable<'a>(collection: &'a [Recipe], user: &UserIngredientSet) -> Vec<&'a Recipe> {
    fully_makeable_with(collection, user, EmptyRecipePolicy::Makeable)
}

pub fn fully_makeable_with<'a>(
    collection: &'a [Recipe],
    user: &UserIngredientSet,
    policy: EmptyRecipePolicy,
) -> Vec<&'a Recipe> {
    collection
        .iter()
        .filter(|recipe| is_fully_makeable(recipe, user, policy))
        .collect()
}

/// Recipes sharing at least one ingredient with `user`
///
/// An empty `user` set yields an empty result.
pub fn any_overlap<'a>(collection: &'a [Recipe], user: &UserIngredientSet) -> Vec<&'a Recipe> {
    collection
        .iter()
        .filter(|recipe| has_overlap(recipe, user))
        .collect()
}

/// All recipes ordered by ascending missing count
///
/// The sort is stable, so recipes with equal counts keep their input order.
pub fn ranked_by_missing_count<'a>(
    collection: &'a [Recipe],
    user: &UserIngredientSet,
) -> Vec<&'a Recipe> {
    let mut ranked: Vec<(usize, &Recipe)> = collection
        .iter()
        .map(|recipe| (missing_count(recipe, user), recipe))
        .collect();
    ranked.sort_by_key(|(missing, _)| *missing);
    ranked.into_iter().map(|(_, recipe)| recipe).collect()
}

/// Identity pass-through for browse-style queries
pub fn unfiltered(collection: &[Recipe]) -> Vec<&Recipe> {
    collection.iter().collect()
}

/// Dispatches to the query mode's matcher
pub fn apply_mode<'a>(
    mode: MatchMode,
    collection: &'a [Recipe],
    user: &UserIngredientSet,
    policy: EmptyRecipePolicy,
) -> Vec<&'a Recipe> {
    match mode {
        MatchMode::FullyMakeable => fully_makeable_with(collection, user, policy),
        MatchMode::AnyOverlap => any_overlap(collection, user),
        MatchMode::RankedByMissingCount => ranked_by_missing_count(collection, user),
        MatchMode::Unfiltered => unfiltered(collection),
    }
}
