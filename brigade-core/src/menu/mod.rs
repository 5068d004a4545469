//! The catering data model: dishes, beverages, menus, requests, cases, and
//! feedback.

mod beverage;
mod case;
mod dish;
mod enums;
mod feedback;
#[allow(clippy::module_inception)]
mod menu;
mod request;

pub use beverage::Beverage;
pub use case::{Case, CaseOutcome, CaseSource};
pub use dish::Dish;
pub use enums::{
    Complexity, CulinaryStyle, CulturalTradition, DishCategory, DishType, EventType, Flavor,
    Season, Temperature,
};
pub use feedback::Feedback;
pub use menu::{CulturalAdaptation, Menu};
pub use request::Request;

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// The smallest valid menu, for tests that only need structure.
    pub fn minimal_menu() -> Menu {
        let dish = |id: &str, dish_type: DishType| Dish {
            id: id.into(),
            name: id.into(),
            dish_type,
            price: 10.0,
            category: DishCategory::Salad,
            styles: vec![],
            seasons: vec![Season::Any],
            temperature: Temperature::Warm,
            complexity: Complexity::Low,
            calories: 200,
            max_guests: 200,
            flavors: vec![],
            diets: vec![],
            ingredients: vec![],
            compatible_beverages: vec![],
            cultural_traditions: vec![],
        };
        Menu::new(
            "menu-test",
            dish("starter", DishType::Starter),
            dish("main", DishType::MainCourse),
            dish("dessert", DishType::Dessert),
            Beverage {
                id: "water".into(),
                name: "Still Water".into(),
                alcoholic: false,
                price: 1.5,
                kind: "soft-drink".into(),
                subtype: None,
                compatible_flavors: vec![],
            },
        )
    }
}
