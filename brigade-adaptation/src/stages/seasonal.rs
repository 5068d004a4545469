//! Seasonal correction: the starter's serving temperature must suit the
//! season.

use brigade_core::menu::{DishType, Menu, Request, Season};
use brigade_core::models::{AdaptationNote, AdaptationStage};
use brigade_core::traits::ICaseStore;
use brigade_knowledge::seasonal::is_starter_temperature_appropriate;
use brigade_similarity::dish_similarity;

use super::replacement_ok;

pub fn apply(
    mut menu: Menu,
    request: &Request,
    store: &dyn ICaseStore,
    notes: &mut Vec<AdaptationNote>,
) -> Menu {
    if request.season == Season::Any
        || is_starter_temperature_appropriate(menu.starter.temperature, request.season)
    {
        return menu;
    }

    let candidates: Vec<_> = store
        .dishes_by_type(DishType::Starter)
        .into_iter()
        .filter(|d| d.id != menu.starter.id)
        .filter(|d| is_starter_temperature_appropriate(d.temperature, request.season))
        .filter(|d| replacement_ok(d, request))
        .collect();

    let best = candidates
        .into_iter()
        .max_by(|a, b| {
            dish_similarity(&menu.starter, a)
                .partial_cmp(&dish_similarity(&menu.starter, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(next) = best {
        notes.push(AdaptationNote::new(
            AdaptationStage::Seasonal,
            format!(
                "{} -> {} (better suited to {:?})",
                menu.starter.name, next.name, request.season
            ),
        ));
        menu = menu.with_starter(next);
    } else {
        notes.push(AdaptationNote::warning(
            AdaptationStage::Seasonal,
            format!(
                "starter temperature {:?} not ideal for {:?}, no valid alternative",
                menu.starter.temperature, request.season
            ),
        ));
    }
    menu
}
