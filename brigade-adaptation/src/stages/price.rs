//! Price rebalancing: bounded course swaps toward the request band.

use brigade_core::config::AdaptationConfig;
use brigade_core::menu::{Dish, Menu, Request};
use brigade_core::models::{AdaptationNote, AdaptationStage};
use brigade_core::traits::ICaseStore;
use brigade_similarity::dish_similarity;

use super::replacement_ok;

/// Swap the costliest (or cheapest) course for the most-similar strictly
/// cheaper (or pricier) alternative until the total enters the band or the
/// swap budget runs out. Residual drift is a warning, never a rejection.
pub fn apply(
    mut menu: Menu,
    request: &Request,
    store: &dyn ICaseStore,
    config: &AdaptationConfig,
    notes: &mut Vec<AdaptationNote>,
) -> Menu {
    if !request.has_price_band() || request.price_in_band(menu.total_price) {
        return menu;
    }

    let mut swaps = 0;
    while swaps < config.max_price_swaps && !request.price_in_band(menu.total_price) {
        let too_expensive = request
            .price_max
            .map_or(false, |hi| menu.total_price > hi);

        // Work on the course with the most room to move.
        let mut courses = menu.courses().map(|(t, d)| (t, d.clone()));
        if too_expensive {
            courses.sort_by(|a, b| b.1.price.partial_cmp(&a.1.price).unwrap_or(std::cmp::Ordering::Equal));
        } else {
            // Upgrading: the main course leads.
            courses.sort_by_key(|(t, _)| match t {
                brigade_core::menu::DishType::MainCourse => 0,
                brigade_core::menu::DishType::Starter => 1,
                brigade_core::menu::DishType::Dessert => 2,
            });
        }

        let mut swapped = false;
        for (course, current) in courses {
            let alternative = best_priced_alternative(store, request, &current, too_expensive);
            if let Some(next) = alternative {
                let delta = next.price - current.price;
                notes.push(AdaptationNote::new(
                    AdaptationStage::Price,
                    format!(
                        "{} -> {} ({}{:.2} per guest)",
                        current.name,
                        next.name,
                        if delta < 0.0 { "" } else { "+" },
                        delta
                    ),
                ));
                menu = menu.with_course(course, next);
                swapped = true;
                break;
            }
        }

        if !swapped {
            break;
        }
        swaps += 1;
    }

    if !request.price_in_band(menu.total_price) {
        notes.push(AdaptationNote::warning(
            AdaptationStage::Price,
            format!(
                "total {:.2} still outside the requested band after {swaps} swap(s)",
                menu.total_price
            ),
        ));
    }
    menu
}

fn best_priced_alternative(
    store: &dyn ICaseStore,
    request: &Request,
    current: &Dish,
    cheaper: bool,
) -> Option<Dish> {
    let mut candidates: Vec<Dish> = store
        .dishes_by_type(current.dish_type)
        .into_iter()
        .filter(|d| d.id != current.id)
        .filter(|d| {
            if cheaper {
                d.price < current.price
            } else {
                d.price > current.price
            }
        })
        .filter(|d| replacement_ok(d, request))
        .collect();

    // Most similar first; price breaks ties in the direction of travel.
    candidates.sort_by(|a, b| {
        let sim_a = dish_similarity(current, a);
        let sim_b = dish_similarity(current, b);
        sim_b
            .partial_cmp(&sim_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                if cheaper {
                    a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal)
                } else {
                    b.price.partial_cmp(&a.price).unwrap_or(std::cmp::Ordering::Equal)
                }
            })
    });
    candidates.into_iter().next()
}
