//! Ingredient name canonicalization and per-recipe extraction
//!
//! User selections and recipe ingredients must both pass through
//! [`canonicalize`] before they are compared.

use std::collections::HashSet;

use crate::models::{DisplayIngredient, Recipe, UserIngredientSet};

/// Canonical comparison form of an ingredient name
///
/// Trims surrounding whitespace, lowercases, and replaces every space with
/// an underscore. A blank input yields an empty string, which callers treat
/// as absent.
pub fn canonicalize(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Canonical names of a recipe's non-empty slots, in slot order
///
/// Duplicates are kept; use [`ingredient_set`] for membership tests.
pub fn extract_ingredients(recipe: &Recipe) -> Vec<String> {
    recipe
        .slots
        .iter()
        .filter_map(|slot| slot.display_name())
        .map(canonicalize)
        .collect()
}

/// Distinct canonical ingredients of a recipe
pub fn ingredient_set(recipe: &Recipe) -> HashSet<String> {
    extract_ingredients(recipe).into_iter().collect()
}

/// Display rows for a recipe's non-empty slots
///
/// Keeps the original capitalization; `missing` is set when the canonical
/// name is not in `user`. A slot without a measure is still listed.
pub fn display_ingredients(recipe: &Recipe, user: &UserIngredientSet) -> Vec<DisplayIngredient> {
    recipe
        .slots
        .iter()
        .filter_map(|slot| {
            let name = slot.display_name()?;
            Some(DisplayIngredient {
                name: name.to_string(),
                measure: slot.display_measure().map(str::to_string),
                missing: !user.contains(&canonicalize(name)),
            })
        })
        .collect()
}
