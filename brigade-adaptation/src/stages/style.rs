//! Style correction: one course swap toward the requested culinary style.

use brigade_core::menu::{DishType, Menu, Request};
use brigade_core::models::{AdaptationNote, AdaptationStage};
use brigade_core::traits::ICaseStore;
use brigade_similarity::dish_similarity;

use super::replacement_ok;

pub fn apply(
    mut menu: Menu,
    request: &Request,
    store: &dyn ICaseStore,
    notes: &mut Vec<AdaptationNote>,
) -> Menu {
    let Some(style) = request.preferred_style else {
        return menu;
    };
    if menu.dominant_style == Some(style) {
        return menu;
    }

    // A course already carrying the style makes it the dominant one.
    if menu.courses().iter().any(|(_, d)| d.has_style(style)) {
        menu.dominant_style = Some(style);
        return menu;
    }

    // Otherwise swap one course, main first.
    for course in [DishType::MainCourse, DishType::Starter, DishType::Dessert] {
        let current = menu.course(course).clone();
        let best = store
            .dishes_by_type(course)
            .into_iter()
            .filter(|d| d.id != current.id)
            .filter(|d| d.has_style(style))
            .filter(|d| replacement_ok(d, request))
            .max_by(|a, b| {
                dish_similarity(&current, a)
                    .partial_cmp(&dish_similarity(&current, b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(next) = best {
            notes.push(AdaptationNote::new(
                AdaptationStage::Style,
                format!("{} -> {} (style {:?})", current.name, next.name, style),
            ));
            menu = menu.with_course(course, next);
            menu.dominant_style = Some(style);
            break;
        }
    }
    menu
}
