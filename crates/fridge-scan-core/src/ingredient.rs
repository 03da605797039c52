//! Ingredient candidates shared by the detection and synthesis stages.

use serde::{Deserialize, Serialize};

/// A named ingredient guess with a percent confidence score.
///
/// Candidates are the currency between the ingredient detector (which
/// produces them ranked) and the recipe synthesizer (which consumes the
/// top few); they also travel upward unchanged for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IngredientCandidate {
    pub name: String,
    /// Confidence in percent, capped per catalog entry.
    pub confidence: u8,
}

impl IngredientCandidate {
    pub fn new(name: impl Into<String>, confidence: u8) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}
