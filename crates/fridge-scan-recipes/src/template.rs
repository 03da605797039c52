//! Data-driven recipe templates.
//!
//! Each template is a static descriptor: fixed fields plus interpolation
//! slots. Adding a recipe kind means adding a descriptor, not new control
//! flow.

use crate::types::Difficulty;

/// The built-in recipe kinds, in emission order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecipeKind {
    MainFocus,
    StirFry,
    Salad,
    Roasted,
    Soup,
}

/// Where one ingredient line takes its name from.
#[derive(Clone, Copy, Debug)]
pub enum IngredientSource {
    /// The detected ingredient at `position`, marked available. Templates
    /// must gate every position they use through
    /// [`RecipeTemplate::min_detected`].
    Detected { position: usize },
    /// The detected ingredient at `position` when present (available),
    /// otherwise the substitute (to buy).
    DetectedOr {
        position: usize,
        substitute: &'static str,
    },
    /// A fixed pantry staple, always marked to buy.
    Staple { name: &'static str },
}

/// One line of a template's ingredient list.
#[derive(Clone, Copy, Debug)]
pub struct IngredientTemplate {
    pub source: IngredientSource,
    pub amount: &'static str,
}

/// A recipe kind descriptor.
///
/// `name`, `description`, and `instructions` may carry the slots `{hero}`,
/// `{Hero}`, `{partner}`, and `{Partner}`; the capitalized variants
/// uppercase the first character of the substituted ingredient name.
#[derive(Clone, Copy, Debug)]
pub struct RecipeTemplate {
    pub kind: RecipeKind,
    /// Minimum number of detected ingredients this template needs; below
    /// it the template is skipped, not an error.
    pub min_detected: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub cooking_time_minutes: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
    pub calories: u32,
    pub ingredients: &'static [IngredientTemplate],
    pub instructions: &'static [&'static str],
}

const fn line(source: IngredientSource, amount: &'static str) -> IngredientTemplate {
    IngredientTemplate { source, amount }
}

/// The five built-in templates, in the fixed emission order. Titles,
/// amounts, timings, and steps are fixed product copy.
pub const BUILTIN_TEMPLATES: &[RecipeTemplate] = &[
    RecipeTemplate {
        kind: RecipeKind::MainFocus,
        min_detected: 1,
        name: "Fresh {Hero} Delight",
        description: "A delicious recipe showcasing {hero} with complementary flavors",
        cooking_time_minutes: 20,
        difficulty: Difficulty::Easy,
        servings: 2,
        calories: 180,
        ingredients: &[
            line(IngredientSource::Detected { position: 0 }, "2 cups"),
            line(
                IngredientSource::DetectedOr {
                    position: 1,
                    substitute: "olive oil",
                },
                "2 tbsp",
            ),
            line(IngredientSource::Staple { name: "salt" }, "to taste"),
            line(IngredientSource::Staple { name: "pepper" }, "to taste"),
        ],
        instructions: &[
            "Prepare the {hero} by washing and cutting as needed",
            "Heat a pan over medium heat",
            "Cook the {hero} for 10-12 minutes until tender",
            "Season with salt and pepper to taste",
            "Serve hot and enjoy",
        ],
    },
    RecipeTemplate {
        kind: RecipeKind::StirFry,
        min_detected: 2,
        name: "{Hero} and {Partner} Stir-Fry",
        description: "A quick and healthy stir-fry combining {hero} and {partner}",
        cooking_time_minutes: 15,
        difficulty: Difficulty::Easy,
        servings: 2,
        calories: 220,
        ingredients: &[
            line(IngredientSource::Detected { position: 0 }, "1.5 cups"),
            line(IngredientSource::Detected { position: 1 }, "1.5 cups"),
            line(IngredientSource::Staple { name: "soy sauce" }, "2 tbsp"),
            line(IngredientSource::Staple { name: "garlic" }, "2 cloves"),
            line(IngredientSource::Staple { name: "ginger" }, "1 tsp"),
        ],
        instructions: &[
            "Heat oil in a wok over high heat",
            "Add {hero} and {partner}",
            "Stir-fry for 5-7 minutes",
            "Add soy sauce, garlic, and ginger",
            "Cook for another 3 minutes and serve",
        ],
    },
    RecipeTemplate {
        kind: RecipeKind::Salad,
        min_detected: 1,
        name: "Garden Fresh {Hero} Salad",
        description: "A crisp and refreshing salad featuring {hero}",
        cooking_time_minutes: 10,
        difficulty: Difficulty::Easy,
        servings: 2,
        calories: 150,
        ingredients: &[
            line(IngredientSource::Detected { position: 0 }, "2 cups"),
            line(
                IngredientSource::DetectedOr {
                    position: 1,
                    substitute: "lettuce",
                },
                "1 cup",
            ),
            line(
                IngredientSource::DetectedOr {
                    position: 2,
                    substitute: "cucumber",
                },
                "1/2 cup",
            ),
            line(IngredientSource::Staple { name: "olive oil" }, "2 tbsp"),
            line(
                IngredientSource::Staple {
                    name: "lemon juice",
                },
                "1 tbsp",
            ),
        ],
        instructions: &[
            "Wash and chop all vegetables",
            "Combine in a large bowl",
            "Drizzle with olive oil and lemon juice",
            "Toss well and season to taste",
            "Serve immediately",
        ],
    },
    RecipeTemplate {
        kind: RecipeKind::Roasted,
        min_detected: 1,
        name: "Herb-Roasted {Hero}",
        description: "Perfectly roasted {hero} with aromatic herbs",
        cooking_time_minutes: 30,
        difficulty: Difficulty::Medium,
        servings: 3,
        calories: 200,
        ingredients: &[
            line(IngredientSource::Detected { position: 0 }, "3 cups"),
            line(IngredientSource::Staple { name: "olive oil" }, "3 tbsp"),
            line(IngredientSource::Staple { name: "rosemary" }, "1 tsp"),
            line(IngredientSource::Staple { name: "thyme" }, "1 tsp"),
            line(
                IngredientSource::Staple {
                    name: "garlic powder",
                },
                "1/2 tsp",
            ),
        ],
        instructions: &[
            "Preheat oven to 400°F (200°C)",
            "Prepare {hero} and place in baking dish",
            "Drizzle with olive oil and sprinkle with herbs",
            "Roast for 25-30 minutes until golden",
            "Serve warm",
        ],
    },
    RecipeTemplate {
        kind: RecipeKind::Soup,
        min_detected: 1,
        name: "Hearty {Hero} Soup",
        description: "A comforting soup featuring {hero} and vegetables",
        cooking_time_minutes: 25,
        difficulty: Difficulty::Easy,
        servings: 4,
        calories: 160,
        ingredients: &[
            line(IngredientSource::Detected { position: 0 }, "2 cups"),
            line(
                IngredientSource::DetectedOr {
                    position: 1,
                    substitute: "carrots",
                },
                "1 cup",
            ),
            line(
                IngredientSource::Staple {
                    name: "vegetable broth",
                },
                "4 cups",
            ),
            line(IngredientSource::Staple { name: "onion" }, "1 medium"),
            line(IngredientSource::Staple { name: "herbs" }, "to taste"),
        ],
        instructions: &[
            "Sauté onions in a large pot until soft",
            "Add {hero} and other vegetables",
            "Pour in vegetable broth",
            "Simmer for 20 minutes",
            "Season with herbs and serve hot",
        ],
    },
];

/// First-character capitalization, as used by the uppercase slots.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Substitute the hero and partner slots into `template`.
///
/// `partner` may be empty when the template carries no partner slots.
pub(crate) fn fill(template: &str, hero: &str, partner: &str) -> String {
    template
        .replace("{Hero}", &capitalize(hero))
        .replace("{hero}", hero)
        .replace("{Partner}", &capitalize(partner))
        .replace("{partner}", partner)
}
