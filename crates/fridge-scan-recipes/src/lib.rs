//! Template-driven recipe synthesis from detected fridge ingredients.
//!
//! Five built-in templates (main focus, stir-fry, salad, roasted, soup) are
//! instantiated over the top detected ingredients. The highest ranked
//! ingredient becomes the hero of every recipe; a template that needs more
//! ingredients than were detected is skipped. Synthesis is pure string and
//! data work, deterministic for a given input.
//!
//! ## Quickstart
//!
//! ```
//! use fridge_scan_core::IngredientCandidate;
//! use fridge_scan_recipes::synthesize;
//!
//! let found = vec![
//!     IngredientCandidate::new("tomatoes", 92),
//!     IngredientCandidate::new("cucumbers", 88),
//! ];
//! let recipes = synthesize(&found)?;
//! assert_eq!(recipes.len(), 5);
//! assert_eq!(recipes[0].name, "Fresh Tomatoes Delight");
//! # Ok::<(), fridge_scan_recipes::SynthesisError>(())
//! ```

mod synthesizer;
mod template;
mod types;

pub use synthesizer::{synthesize, synthesize_with, SynthesisError, MAIN_INGREDIENT_LIMIT};
pub use template::{
    IngredientSource, IngredientTemplate, RecipeKind, RecipeTemplate, BUILTIN_TEMPLATES,
};
pub use types::{Difficulty, Recipe, RecipeIngredient};
