//! Beverage matching: swap toward the alcohol preference, favoring
//! flavor-compatible subtypes.

use brigade_core::menu::{Beverage, Menu, Request};
use brigade_core::models::{AdaptationNote, AdaptationStage};
use brigade_core::traits::ICaseStore;
use brigade_knowledge::flavor::are_flavors_compatible;
use brigade_knowledge::wine::wine_priority;

pub fn apply(
    mut menu: Menu,
    request: &Request,
    store: &dyn ICaseStore,
    notes: &mut Vec<AdaptationNote>,
) -> Menu {
    let current_alcoholic = menu.beverage.alcoholic;

    if request.wants_wine && !current_alcoholic {
        let wines = store.beverages_by_alcohol(true);
        if let Some(wine) = best_match(&menu, wines) {
            notes.push(AdaptationNote::new(
                AdaptationStage::Beverage,
                format!("{} -> {} (wine pairing)", menu.beverage.name, wine.name),
            ));
            menu = menu.with_beverage(wine);
        }
    } else if !request.wants_wine && current_alcoholic {
        let soft = store.beverages_by_alcohol(false);
        if let Some(beverage) = best_match(&menu, soft) {
            notes.push(AdaptationNote::new(
                AdaptationStage::Beverage,
                format!("{} -> {} (non-alcoholic)", menu.beverage.name, beverage.name),
            ));
            menu = menu.with_beverage(beverage);
        }
    }
    menu
}

/// Rank beverages by subtype priority plus flavor compatibility with the
/// main course: direct matches count double, general harmony once.
fn best_match(menu: &Menu, candidates: Vec<Beverage>) -> Option<Beverage> {
    let main_flavors = &menu.main_course.flavors;
    candidates.into_iter().max_by_key(|b| {
        let priority = b
            .subtype
            .as_deref()
            .map(|s| wine_priority(s, false))
            .unwrap_or(0);
        let mut score = priority;
        for flavor in &b.compatible_flavors {
            if main_flavors.contains(flavor) {
                score += 2;
            }
            for main_flavor in main_flavors {
                if are_flavors_compatible(*flavor, *main_flavor) {
                    score += 1;
                }
            }
        }
        score
    })
}
