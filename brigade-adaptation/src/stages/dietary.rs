//! Dietary fix-up: ingredient-level substitution within ingredient groups.

use brigade_core::menu::{DishType, Menu, Request};
use brigade_core::models::{AdaptationNote, AdaptationStage};
use brigade_knowledge::IngredientCatalog;

use super::StageOutcome;

/// For every course and unmet required diet, substitute each violating
/// ingredient with a same-group compliant alternative. A single ingredient
/// without a substitute rejects the candidate.
pub fn apply(
    mut menu: Menu,
    request: &Request,
    catalog: &IngredientCatalog,
    notes: &mut Vec<AdaptationNote>,
) -> StageOutcome {
    if request.required_diets.is_empty() {
        return StageOutcome::Continue(menu);
    }

    for course in [DishType::Starter, DishType::MainCourse, DishType::Dessert] {
        let mut dish = menu.course(course).clone();
        let unmet: Vec<String> = request
            .required_diets
            .iter()
            .filter(|d| !dish.diets.contains(*d))
            .cloned()
            .collect();
        if unmet.is_empty() {
            continue;
        }

        for index in 0..dish.ingredients.len() {
            let ingredient = dish.ingredients[index].clone();
            if catalog
                .violated_labels(&ingredient, &request.required_diets)
                .is_empty()
            {
                continue;
            }
            match catalog.find_dietary_substitution(&ingredient, &request.required_diets) {
                Some(substitution) => {
                    dish.ingredients[index] = substitution.replacement.clone();
                    notes.push(AdaptationNote::new(
                        AdaptationStage::Dietary,
                        format!(
                            "{}: {} -> {} ({})",
                            dish.name, substitution.original, substitution.replacement,
                            substitution.reason
                        ),
                    ));
                }
                None => {
                    return StageOutcome::Reject(format!(
                        "no substitute for {ingredient} in {}",
                        dish.name
                    ));
                }
            }
        }

        // Every violation is fixed; the course now satisfies the unmet
        // labels.
        for diet in unmet {
            if !dish.diets.contains(&diet) {
                dish.diets.push(diet);
            }
        }
        menu = menu.with_course(course, dish);
    }

    StageOutcome::Continue(menu)
}

/// Defensive allergen re-check after substitutions. Any survivor is a hard
/// rejection.
pub fn recheck_allergens(menu: &Menu, request: &Request) -> Option<String> {
    if request.restricted_ingredients.is_empty() {
        return None;
    }
    let present: Vec<String> = menu
        .ingredients()
        .into_iter()
        .filter(|i| request.restricted_ingredients.contains(i))
        .collect();
    (!present.is_empty()).then(|| format!("restricted ingredients present: {}", present.join(", ")))
}
