use serde::Serialize;
use std::collections::BTreeSet;

use crate::services::ingredients::canonicalize;

/// Ingredients the user has on hand, stored in canonical form
///
/// An empty set means "the user has nothing"; it is never a wildcard.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct UserIngredientSet {
    ingredients: BTreeSet<String>,
}

impl UserIngredientSet {
    /// Creates an empty ingredient set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient by display name
    ///
    /// Returns `false` when the name is blank or already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let canonical = canonicalize(name);
        if canonical.is_empty() {
            return false;
        }
        self.ingredients.insert(canonical)
    }

    /// Removes an ingredient by display name
    pub fn remove(&mut self, name: &str) -> bool {
        self.ingredients.remove(&canonicalize(name))
    }

    /// Membership test against an already-canonical name
    pub fn contains(&self, canonical: &str) -> bool {
        self.ingredients.contains(canonical)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Canonical names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(String::as_str)
    }

    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.ingredients
    }
}

impl<S: AsRef<str>> FromIterator<S> for UserIngredientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}
