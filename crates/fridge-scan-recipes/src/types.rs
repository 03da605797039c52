//! Recipe data model.

use serde::{Deserialize, Serialize};

/// Relative effort to cook a recipe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One line of a recipe's ingredient list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    /// Free-text amount ("2 cups", "to taste").
    pub amount: String,
    /// Whether the ingredient was among the detected input (`true`) or goes
    /// on the shopping list (`false`).
    pub available: bool,
}

/// A generated recipe suggestion.
///
/// Built fresh per synthesis call and never mutated afterwards; ownership
/// passes to the caller for display or persistence.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Total cooking time in minutes.
    #[serde(rename = "cookingTime")]
    pub cooking_time_minutes: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    /// Free-text steps, in order.
    pub instructions: Vec<String>,
    pub calories: u32,
}
