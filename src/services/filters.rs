use crate::models::{AttributeFilters, Recipe};

/// Filter value that leaves an attribute unconstrained
const ANY: &str = "Any";

/// Normalizes a filter value: blank or "Any" means no constraint
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty() && !v.eq_ignore_ascii_case(ANY))
}

/// Exact, case-sensitive attribute comparison; a recipe without the
/// attribute never matches an active filter
fn attribute_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// Whether a single recipe passes every active filter
pub fn matches_filters(recipe: &Recipe, filters: &AttributeFilters) -> bool {
    attribute_matches(active(&filters.glass), recipe.glass.as_deref())
        && attribute_matches(active(&filters.category), recipe.category.as_deref())
        && attribute_matches(active(&filters.alcohol), recipe.alcoholic.as_deref())
}

/// Recipes passing every active filter, in input order
pub fn apply_filters<'a, R>(collection: &'a [R], filters: &AttributeFilters) -> Vec<&'a R>
where
    R: AsRef<Recipe>,
{
    collection
        .iter()
        .filter(|recipe| matches_filters((*recipe).as_ref(), filters))
        .collect()
}
