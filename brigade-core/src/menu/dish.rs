use serde::{Deserialize, Serialize};

use super::enums::{
    Complexity, CulinaryStyle, CulturalTradition, DishCategory, DishType, Flavor, Season,
    Temperature,
};

/// A catalog dish. Catalog entries are immutable; adaptation always works on
/// clones, never on the catalog's own records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// Stable catalog identifier.
    pub id: String,
    pub name: String,
    pub dish_type: DishType,
    /// Price per guest.
    pub price: f64,
    pub category: DishCategory,
    #[serde(default)]
    pub styles: Vec<CulinaryStyle>,
    /// Seasons the dish can be served in; `Any` means year-round.
    #[serde(default)]
    pub seasons: Vec<Season>,
    pub temperature: Temperature,
    pub complexity: Complexity,
    pub calories: u32,
    /// Largest head count the kitchen can plate this dish for.
    pub max_guests: u32,
    #[serde(default)]
    pub flavors: Vec<Flavor>,
    /// Diet labels this dish satisfies (e.g. "vegan", "gluten-free").
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Beverage ids known to pair well.
    #[serde(default)]
    pub compatible_beverages: Vec<String>,
    #[serde(default)]
    pub cultural_traditions: Vec<CulturalTradition>,
}

impl Dish {
    /// Whether the dish can be served in `season`.
    pub fn available_in_season(&self, season: Season) -> bool {
        season == Season::Any
            || self.seasons.contains(&Season::Any)
            || self.seasons.contains(&season)
    }

    /// Whether the dish satisfies every required diet label.
    pub fn meets_diets(&self, required: &[String]) -> bool {
        required.iter().all(|d| self.diets.contains(d))
    }

    /// Whether the dish contains any restricted ingredient.
    pub fn has_restricted_ingredient(&self, restricted: &[String]) -> bool {
        self.ingredients.iter().any(|i| restricted.contains(i))
    }

    /// Whether the dish carries the given style.
    pub fn has_style(&self, style: CulinaryStyle) -> bool {
        self.styles.contains(&style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(seasons: Vec<Season>, diets: Vec<&str>, ingredients: Vec<&str>) -> Dish {
        Dish {
            id: "d".into(),
            name: "Test".into(),
            dish_type: DishType::Starter,
            price: 10.0,
            category: DishCategory::Salad,
            styles: vec![],
            seasons,
            temperature: Temperature::Cold,
            complexity: Complexity::Low,
            calories: 100,
            max_guests: 200,
            flavors: vec![],
            diets: diets.into_iter().map(String::from).collect(),
            ingredients: ingredients.into_iter().map(String::from).collect(),
            compatible_beverages: vec![],
            cultural_traditions: vec![],
        }
    }

    #[test]
    fn year_round_dish_is_always_available() {
        let d = dish(vec![Season::Any], vec![], vec![]);
        assert!(d.available_in_season(Season::Winter));
    }

    #[test]
    fn seasonal_dish_restricted_to_its_seasons() {
        let d = dish(vec![Season::Summer], vec![], vec![]);
        assert!(d.available_in_season(Season::Summer));
        assert!(!d.available_in_season(Season::Winter));
        // An unconstrained request accepts any dish.
        assert!(d.available_in_season(Season::Any));
    }

    #[test]
    fn diet_check_requires_all_labels() {
        let d = dish(vec![], vec!["vegan", "gluten-free"], vec![]);
        assert!(d.meets_diets(&["vegan".into()]));
        assert!(!d.meets_diets(&["vegan".into(), "nut-free".into()]));
    }

    #[test]
    fn restricted_ingredient_detection() {
        let d = dish(vec![], vec![], vec!["shrimp", "garlic"]);
        assert!(d.has_restricted_ingredient(&["shrimp".into()]));
        assert!(!d.has_restricted_ingredient(&["peanut".into()]));
    }
}
