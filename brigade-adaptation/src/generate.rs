//! Bounded constrained random generation, the fallback when too few
//! retrieved candidates survive adaptation.

use rand::seq::SliceRandom;
use rand::rngs::StdRng;
use tracing::debug;

use brigade_core::config::AdaptationConfig;
use brigade_core::menu::{Case, Flavor, Menu, Request};
use brigade_core::traits::ICaseStore;
use brigade_knowledge::categories::are_categories_compatible;
use brigade_knowledge::events::preferred_styles;
use brigade_knowledge::flavor::any_flavor_harmony;
use brigade_similarity::{combined_case_similarity, SimilarityEngine};

use crate::stages::replacement_ok;

/// Whether a dessert works after a fatty main: fruit or sour notes refresh
/// the palate; sweet-and-fatty desserts do not.
fn dessert_ok_after_fatty(main_is_fatty: bool, dessert: &brigade_core::menu::Dish) -> bool {
    use brigade_core::menu::DishCategory;
    if !main_is_fatty {
        return true;
    }
    if dessert.category == DishCategory::Fruit {
        return true;
    }
    if dessert.flavors.contains(&Flavor::Sour) {
        return true;
    }
    !(dessert.flavors.contains(&Flavor::Fatty) && dessert.flavors.contains(&Flavor::Sweet))
}

/// Sample a menu satisfying every hard constraint, or `None` when the
/// attempt budget runs dry. The generated menu is screened against the
/// negative cases exactly like an adapted candidate.
pub fn generate_menu(
    store: &dyn ICaseStore,
    request: &Request,
    similarity: &SimilarityEngine,
    negatives: &[Case],
    config: &AdaptationConfig,
    rng: &mut StdRng,
) -> Option<Menu> {
    use brigade_core::menu::DishType;

    let starters: Vec<_> = store
        .dishes_by_type(DishType::Starter)
        .into_iter()
        .filter(|d| replacement_ok(d, request))
        .collect();
    let mains: Vec<_> = store
        .dishes_by_type(DishType::MainCourse)
        .into_iter()
        .filter(|d| replacement_ok(d, request))
        .collect();
    let desserts: Vec<_> = store
        .dishes_by_type(DishType::Dessert)
        .into_iter()
        .filter(|d| replacement_ok(d, request))
        .collect();
    let beverages = store.beverages_by_alcohol(request.wants_wine);

    if starters.is_empty() || mains.is_empty() || desserts.is_empty() || beverages.is_empty() {
        debug!("generation pool empty after constraint filtering");
        return None;
    }

    for _ in 0..config.max_generation_attempts {
        let starter = starters.choose(rng)?.clone();
        let main = mains.choose(rng)?.clone();
        let dessert = desserts.choose(rng)?.clone();
        let beverage = beverages.choose(rng)?.clone();

        let total = starter.price + main.price + dessert.price + beverage.price;
        if !request.price_in_band(total) {
            continue;
        }
        if !are_categories_compatible(starter.category, main.category) {
            continue;
        }
        if !any_flavor_harmony(&starter.flavors, &main.flavors) {
            continue;
        }
        let main_is_fatty = main.flavors.contains(&Flavor::Fatty);
        if !dessert_ok_after_fatty(main_is_fatty, &dessert) {
            continue;
        }

        let mut menu = Menu::new(
            format!("generated-{}", uuid::Uuid::new_v4()),
            starter,
            main,
            dessert,
            beverage,
        );

        // Dominant style: the first event-preferred style any course
        // carries.
        let all_styles: Vec<_> = menu
            .courses()
            .iter()
            .flat_map(|(_, d)| d.styles.iter().copied())
            .collect();
        menu.dominant_style = preferred_styles(request.event_type)
            .iter()
            .find(|s| all_styles.contains(s))
            .copied();

        // Never regenerate a documented failure.
        let near_negative = negatives.iter().any(|case| {
            combined_case_similarity(similarity, request, &menu, case) > config.negative_similarity
        });
        if near_negative {
            continue;
        }

        return Some(menu);
    }

    debug!(
        attempts = config.max_generation_attempts,
        "generation exhausted without a valid menu"
    );
    None
}
