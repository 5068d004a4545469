//! Cultural re-theming: per-course fit scoring, whole-dish replacement
//! below the threshold, single-ingredient improvement above it.

use brigade_core::config::AdaptationConfig;
use brigade_core::menu::{
    CulturalAdaptation, Dish, DishType, Flavor, Menu, Request, Temperature,
};
use brigade_core::models::{AdaptationNote, AdaptationStage};
use brigade_core::traits::ICaseStore;
use brigade_knowledge::IngredientCatalog;

use super::replacement_ok;

pub fn apply(
    mut menu: Menu,
    request: &Request,
    store: &dyn ICaseStore,
    catalog: &IngredientCatalog,
    config: &AdaptationConfig,
    notes: &mut Vec<AdaptationNote>,
) -> Menu {
    let Some(target) = request.cultural_preference else {
        return menu;
    };
    if menu.cultural_theme == Some(target) {
        return menu;
    }

    let mut changed = false;

    for course in [DishType::Starter, DishType::MainCourse, DishType::Dessert] {
        let dish = menu.course(course).clone();
        if dish.ingredients.is_empty() {
            continue;
        }
        let fit = catalog.cultural_fit(&dish.ingredients, target);

        if fit < config.dish_replace_threshold {
            // The dish is too far off-theme: replace it wholesale, ranked
            // by a blend of cultural fit, flavor overlap, and temperature.
            let replacement = best_cultural_replacement(store, request, catalog, &dish, target);
            if let Some(next) = replacement {
                notes.push(AdaptationNote::new(
                    AdaptationStage::Cultural,
                    format!(
                        "dish replacement: {} -> {} (cultural fit {:.0}%)",
                        dish.name,
                        next.name,
                        fit * 100.0
                    ),
                ));
                menu.cultural_adaptations.push(CulturalAdaptation::DishReplacement {
                    course,
                    original_dish: dish.name.clone(),
                    replacement_dish: next.name.clone(),
                    reason: format!("cultural fit {:.0}% below replacement threshold", fit * 100.0),
                });
                menu = menu.with_course(course, next);
                changed = true;
            }
        } else {
            // Close enough: substitute single ingredients, each only when
            // it strictly improves the fit.
            let mut adapted = dish.clone();
            let mut touched = false;
            for index in 0..adapted.ingredients.len() {
                let ingredient = adapted.ingredients[index].clone();
                let Some(substitution) = catalog.find_cultural_substitution(&ingredient, target)
                else {
                    continue;
                };
                let before = catalog.cultural_credit(&ingredient, target);
                let after = catalog.cultural_credit(&substitution.replacement, target);
                if after <= before {
                    continue;
                }
                adapted.ingredients[index] = substitution.replacement.clone();
                menu.cultural_adaptations.push(CulturalAdaptation::IngredientSwap {
                    course,
                    dish_name: adapted.name.clone(),
                    original: substitution.original.clone(),
                    replacement: substitution.replacement.clone(),
                    reason: substitution.reason.clone(),
                    confidence: substitution.confidence,
                });
                notes.push(AdaptationNote::new(
                    AdaptationStage::Cultural,
                    format!(
                        "{}: {} -> {}",
                        adapted.name, substitution.original, substitution.replacement
                    ),
                ));
                touched = true;
            }
            if touched {
                menu = menu.with_course(course, adapted);
                changed = true;
            }
        }
    }

    if changed {
        menu.cultural_theme = Some(target);
    }
    menu
}

/// Blended ranking for whole-dish replacement: cultural fit dominates,
/// flavor overlap and temperature keep the menu coherent.
fn best_cultural_replacement(
    store: &dyn ICaseStore,
    request: &Request,
    catalog: &IngredientCatalog,
    current: &Dish,
    target: brigade_core::menu::CulturalTradition,
) -> Option<Dish> {
    let candidates: Vec<Dish> = store
        .dishes_by_type(current.dish_type)
        .into_iter()
        .filter(|d| d.id != current.id)
        .filter(|d| replacement_ok(d, request))
        .collect();

    candidates
        .into_iter()
        .map(|d| {
            let fit = catalog.cultural_fit(&d.ingredients, target);
            let flavor = flavor_overlap(&current.flavors, &d.flavors);
            let temperature = temperature_match(current.temperature, d.temperature);
            (0.5 * fit + 0.25 * flavor + 0.25 * temperature, d)
        })
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, d)| d)
}

fn flavor_overlap(a: &[Flavor], b: &[Flavor]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.5;
    }
    let common = a.iter().filter(|f| b.contains(f)).count();
    let union = a.len() + b.len() - common;
    if union == 0 {
        0.5
    } else {
        common as f64 / union as f64
    }
}

fn temperature_match(a: Temperature, b: Temperature) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}
