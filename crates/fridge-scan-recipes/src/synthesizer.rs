//! Template instantiation over detected ingredients.

use fridge_scan_core::IngredientCandidate;
use log::debug;
use thiserror::Error;

use crate::template::{fill, IngredientSource, RecipeTemplate, BUILTIN_TEMPLATES};
use crate::types::{Recipe, RecipeIngredient};

/// How many detected ingredients synthesis actually uses.
pub const MAIN_INGREDIENT_LIMIT: usize = 3;

/// Errors returned by recipe synthesis.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum SynthesisError {
    /// Synthesis needs at least one detected ingredient; there is no
    /// recipe-side fallback wrapping this stage.
    #[error("no ingredients to synthesize recipes from")]
    NoIngredients,
}

/// Build recipe suggestions from ranked ingredient candidates.
///
/// Only the first [`MAIN_INGREDIENT_LIMIT`] candidates participate; the
/// highest ranked becomes the hero of every recipe. Output keeps the fixed
/// template order, with templates short of their `min_detected` skipped:
/// five recipes with two or more ingredients, four with one (the stir-fry
/// needs a partner).
pub fn synthesize(candidates: &[IngredientCandidate]) -> Result<Vec<Recipe>, SynthesisError> {
    synthesize_with(BUILTIN_TEMPLATES, candidates)
}

/// Build recipes from an explicit template set.
pub fn synthesize_with(
    templates: &[RecipeTemplate],
    candidates: &[IngredientCandidate],
) -> Result<Vec<Recipe>, SynthesisError> {
    if candidates.is_empty() {
        return Err(SynthesisError::NoIngredients);
    }

    let mains: Vec<&str> = candidates
        .iter()
        .take(MAIN_INGREDIENT_LIMIT)
        .map(|c| c.name.as_str())
        .collect();

    let recipes: Vec<Recipe> = templates
        .iter()
        .filter(|t| mains.len() >= t.min_detected)
        .map(|t| instantiate(t, &mains))
        .collect();

    debug!(
        "synthesized {} recipes from {} main ingredients",
        recipes.len(),
        mains.len()
    );
    Ok(recipes)
}

fn instantiate(template: &RecipeTemplate, mains: &[&str]) -> Recipe {
    let hero = mains[0];
    let partner = mains.get(1).copied().unwrap_or("");

    let ingredients = template
        .ingredients
        .iter()
        .map(|line| {
            let (name, available) = match line.source {
                IngredientSource::Detected { position } => (mains[position].to_string(), true),
                IngredientSource::DetectedOr {
                    position,
                    substitute,
                } => match mains.get(position) {
                    Some(name) => ((*name).to_string(), true),
                    None => (substitute.to_string(), false),
                },
                IngredientSource::Staple { name } => (name.to_string(), false),
            };
            RecipeIngredient {
                name,
                amount: line.amount.to_string(),
                available,
            }
        })
        .collect();

    let instructions = template
        .instructions
        .iter()
        .map(|step| fill(step, hero, partner))
        .collect();

    Recipe {
        name: fill(template.name, hero, partner),
        description: fill(template.description, hero, partner),
        cooking_time_minutes: template.cooking_time_minutes,
        difficulty: template.difficulty,
        servings: template.servings,
        ingredients,
        instructions,
        calories: template.calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::RecipeKind;
    use crate::types::Difficulty;

    fn candidates(names: &[&str]) -> Vec<IngredientCandidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| IngredientCandidate::new(*name, 95 - i as u8))
            .collect()
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(synthesize(&[]), Err(SynthesisError::NoIngredients));
    }

    #[test]
    fn single_ingredient_skips_the_stir_fry() {
        let recipes = synthesize(&candidates(&["tomatoes"])).unwrap();
        assert_eq!(recipes.len(), 4);
        assert_eq!(recipes[0].name, "Fresh Tomatoes Delight");
        assert_eq!(recipes[1].name, "Garden Fresh Tomatoes Salad");
        assert_eq!(recipes[2].name, "Herb-Roasted Tomatoes");
        assert_eq!(recipes[3].name, "Hearty Tomatoes Soup");
    }

    #[test]
    fn two_ingredients_unlock_all_five_in_template_order() {
        let recipes = synthesize(&candidates(&["tomatoes", "cucumbers"])).unwrap();
        assert_eq!(recipes.len(), 5);
        assert_eq!(recipes[1].name, "Tomatoes and Cucumbers Stir-Fry");
        assert_eq!(
            recipes[1].description,
            "A quick and healthy stir-fry combining tomatoes and cucumbers"
        );
    }

    #[test]
    fn hero_is_interpolated_into_steps() {
        let recipes = synthesize(&candidates(&["carrots"])).unwrap();
        let main_focus = &recipes[0];
        assert_eq!(
            main_focus.instructions[0],
            "Prepare the carrots by washing and cutting as needed"
        );
        assert_eq!(
            main_focus.instructions[2],
            "Cook the carrots for 10-12 minutes until tender"
        );
        // Slotless steps pass through untouched.
        assert_eq!(main_focus.instructions[4], "Serve hot and enjoy");
    }

    #[test]
    fn substitutes_step_in_for_missing_positions() {
        let one = synthesize(&candidates(&["tomatoes"])).unwrap();
        let salad = one
            .iter()
            .find(|r| r.name.contains("Salad"))
            .unwrap();
        // Positions 1 and 2 are missing: lettuce and cucumber step in, to buy.
        assert_eq!(salad.ingredients[1].name, "lettuce");
        assert!(!salad.ingredients[1].available);
        assert_eq!(salad.ingredients[2].name, "cucumber");
        assert!(!salad.ingredients[2].available);

        let three = synthesize(&candidates(&["tomatoes", "lettuce", "mushrooms"])).unwrap();
        let salad = three
            .iter()
            .find(|r| r.name.contains("Salad"))
            .unwrap();
        // Detected ingredients fill the same slots, marked available.
        assert_eq!(salad.ingredients[1].name, "lettuce");
        assert!(salad.ingredients[1].available);
        assert_eq!(salad.ingredients[2].name, "mushrooms");
        assert!(salad.ingredients[2].available);
    }

    #[test]
    fn main_focus_ingredient_list_is_exact() {
        let recipes = synthesize(&candidates(&["carrots"])).unwrap();
        let lines: Vec<(&str, &str, bool)> = recipes[0]
            .ingredients
            .iter()
            .map(|i| (i.name.as_str(), i.amount.as_str(), i.available))
            .collect();
        // Hero, the olive-oil substitute for the missing second ingredient,
        // then the two staples.
        assert_eq!(
            lines,
            vec![
                ("carrots", "2 cups", true),
                ("olive oil", "2 tbsp", false),
                ("salt", "to taste", false),
                ("pepper", "to taste", false),
            ]
        );
    }

    #[test]
    fn every_template_keeps_its_fixed_amounts() {
        let recipes = synthesize(&candidates(&["tomatoes", "cucumbers"])).unwrap();
        let expected: [&[&str]; 5] = [
            &["2 cups", "2 tbsp", "to taste", "to taste"],
            &["1.5 cups", "1.5 cups", "2 tbsp", "2 cloves", "1 tsp"],
            &["2 cups", "1 cup", "1/2 cup", "2 tbsp", "1 tbsp"],
            &["3 cups", "3 tbsp", "1 tsp", "1 tsp", "1/2 tsp"],
            &["2 cups", "1 cup", "4 cups", "1 medium", "to taste"],
        ];
        for (recipe, amounts) in recipes.iter().zip(expected) {
            let got: Vec<&str> = recipe
                .ingredients
                .iter()
                .map(|i| i.amount.as_str())
                .collect();
            assert_eq!(got, amounts, "{}", recipe.name);
        }
    }

    #[test]
    fn staples_are_always_marked_to_buy() {
        let recipes = synthesize(&candidates(&["potatoes", "onions"])).unwrap();
        let stir_fry = recipes
            .iter()
            .find(|r| r.name.contains("Stir-Fry"))
            .unwrap();
        assert_eq!(stir_fry.ingredients[0].name, "potatoes");
        assert!(stir_fry.ingredients[0].available);
        assert_eq!(stir_fry.ingredients[1].name, "onions");
        assert!(stir_fry.ingredients[1].available);
        for staple in &stir_fry.ingredients[2..] {
            assert!(!staple.available, "{}", staple.name);
        }
        assert_eq!(stir_fry.ingredients[2].amount, "2 tbsp");
    }

    #[test]
    fn fixed_fields_come_from_the_template() {
        let recipes = synthesize(&candidates(&["cheese", "milk"])).unwrap();
        let roasted = recipes
            .iter()
            .find(|r| r.name.starts_with("Herb-Roasted"))
            .unwrap();
        assert_eq!(roasted.cooking_time_minutes, 30);
        assert_eq!(roasted.difficulty, Difficulty::Medium);
        assert_eq!(roasted.servings, 3);
        assert_eq!(roasted.calories, 200);
        assert_eq!(roasted.instructions[0], "Preheat oven to 400°F (200°C)");
    }

    #[test]
    fn only_the_top_three_candidates_participate() {
        let recipes = synthesize(&candidates(&[
            "tomatoes",
            "cucumbers",
            "lettuce",
            "eggs",
            "milk",
        ]))
        .unwrap();
        for recipe in &recipes {
            for ingredient in &recipe.ingredients {
                assert_ne!(ingredient.name, "eggs");
                assert_ne!(ingredient.name, "milk");
            }
        }
    }

    #[test]
    fn multi_word_heroes_capitalize_only_the_first_word() {
        let recipes = synthesize(&candidates(&["red bell peppers"])).unwrap();
        assert_eq!(recipes[0].name, "Fresh Red bell peppers Delight");
        assert_eq!(
            recipes[0].instructions[0],
            "Prepare the red bell peppers by washing and cutting as needed"
        );
    }

    #[test]
    fn duplicate_hero_and_substitute_coexist() {
        // With carrots as the only ingredient, the soup lists carrots twice:
        // once detected as the hero, once as the position-1 substitute.
        let recipes = synthesize(&candidates(&["carrots"])).unwrap();
        let soup = recipes.iter().find(|r| r.name.contains("Soup")).unwrap();
        assert_eq!(soup.ingredients[0].name, "carrots");
        assert!(soup.ingredients[0].available);
        assert_eq!(soup.ingredients[1].name, "carrots");
        assert!(!soup.ingredients[1].available);
    }

    #[test]
    fn custom_template_sets_are_honored() {
        static JUST_TOAST: &[RecipeTemplate] = &[RecipeTemplate {
            kind: RecipeKind::MainFocus,
            min_detected: 1,
            name: "{Hero} on Toast",
            description: "Toast with {hero}",
            cooking_time_minutes: 5,
            difficulty: Difficulty::Easy,
            servings: 1,
            calories: 120,
            ingredients: &[crate::template::IngredientTemplate {
                source: IngredientSource::Detected { position: 0 },
                amount: "1 cup",
            }],
            instructions: &["Toast bread", "Top with {hero}"],
        }];
        let recipes = synthesize_with(JUST_TOAST, &candidates(&["broccoli"])).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Broccoli on Toast");
        assert_eq!(recipes[0].instructions[1], "Top with broccoli");
    }
}
