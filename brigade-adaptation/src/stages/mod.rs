//! Pipeline stages, one per file, in execution order.

pub mod beverage;
pub mod cultural;
pub mod dietary;
pub mod price;
pub mod seasonal;
pub mod style;

use brigade_core::menu::{Dish, Menu, Request};

/// A stage either hands the (possibly transformed) menu onward or rejects
/// the whole candidate with a reason.
pub enum StageOutcome {
    Continue(Menu),
    Reject(String),
}

/// Hard constraints any replacement dish must satisfy, regardless of which
/// stage swaps it in.
pub fn replacement_ok(dish: &Dish, request: &Request) -> bool {
    dish.meets_diets(&request.required_diets)
        && !dish.has_restricted_ingredient(&request.restricted_ingredients)
        && dish.max_guests >= request.num_guests
        && dish.available_in_season(request.season)
}
