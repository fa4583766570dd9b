use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of positional ingredient/measure fields on a catalog drink record
pub const MAX_INGREDIENT_SLOTS: usize = 15;

const DATE_MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One positional ingredient slot of a recipe
///
/// A slot whose `ingredient` is absent or blank is empty and is skipped by
/// every extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    pub fn new(ingredient: &str, measure: Option<&str>) -> Self {
        Self {
            ingredient: Some(ingredient.to_string()),
            measure: measure.map(str::to_string),
        }
    }

    /// Trimmed display name, or `None` for an empty slot
    pub fn display_name(&self) -> Option<&str> {
        self.ingredient
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Trimmed measure text, or `None` when absent or blank
    pub fn display_measure(&self) -> Option<&str> {
        self.measure
            .as_deref()
            .map(str::trim)
            .filter(|measure| !measure.is_empty())
    }
}

/// A single cocktail recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub instructions: Option<String>,
    pub glass: Option<String>,
    pub category: Option<String>,
    pub alcoholic: Option<String>,
    pub date_modified: Option<NaiveDateTime>,
    /// Ordered slots, at most [`MAX_INGREDIENT_SLOTS`]
    #[serde(default)]
    pub slots: Vec<IngredientSlot>,
}

/// Recipes assembled from one or more catalog fetches; may hold duplicates
pub type RecipeCollection = Vec<Recipe>;

impl Recipe {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Appends an ingredient slot, ignoring anything past the slot limit
    pub fn with_ingredient(mut self, ingredient: &str, measure: Option<&str>) -> Self {
        if self.slots.len() < MAX_INGREDIENT_SLOTS {
            self.slots.push(IngredientSlot::new(ingredient, measure));
        }
        self
    }

    pub fn with_glass(mut self, glass: &str) -> Self {
        self.glass = Some(glass.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_alcoholic(mut self, alcoholic: &str) -> Self {
        self.alcoholic = Some(alcoholic.to_string());
        self
    }
}

impl AsRef<Recipe> for Recipe {
    fn as_ref(&self) -> &Recipe {
        self
    }
}

// ============================================================================
// Catalog API Types
// ============================================================================

/// Raw drink record as returned by the catalog API
///
/// Kept as a loosely-typed JSON object: the upstream uses flat numbered
/// fields (`strIngredient1`..`strIngredient15`) and freely mixes `null`,
/// empty strings and missing keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ApiDrink(pub Map<String, Value>);

impl ApiDrink {
    /// String value of a field; non-string values count as absent
    fn text(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn non_blank(&self, key: &str) -> Option<String> {
        self.text(key).filter(|value| !value.trim().is_empty())
    }

    /// Adapts the record into a [`Recipe`]
    ///
    /// Returns `None` only when the record has no usable `idDrink`; every
    /// other missing or mistyped field degrades to absent.
    pub fn to_recipe(&self) -> Option<Recipe> {
        let id = self.non_blank("idDrink")?;

        let slots = (1..=MAX_INGREDIENT_SLOTS)
            .map(|i| IngredientSlot {
                ingredient: self.text(&format!("strIngredient{}", i)),
                measure: self.text(&format!("strMeasure{}", i)),
            })
            .collect();

        let date_modified = self.non_blank("dateModified").and_then(|raw| {
            NaiveDateTime::parse_from_str(raw.trim(), DATE_MODIFIED_FORMAT).ok()
        });

        Some(Recipe {
            id,
            name: self.text("strDrink").unwrap_or_default(),
            thumbnail: self.non_blank("strDrinkThumb"),
            instructions: self.non_blank("strInstructions"),
            glass: self.non_blank("strGlass"),
            category: self.non_blank("strCategory"),
            alcoholic: self.non_blank("strAlcoholic"),
            date_modified,
            slots,
        })
    }
}
