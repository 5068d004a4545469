use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::beverage::Beverage;
use super::dish::Dish;
use super::enums::{CulinaryStyle, CulturalTradition, DishType};

/// One entry in a menu's cultural-adaptation audit trail.
///
/// Serialized as a tagged enum so the adaptation kind survives JSON
/// round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CulturalAdaptation {
    /// A single ingredient was swapped inside a course.
    IngredientSwap {
        course: DishType,
        dish_name: String,
        original: String,
        replacement: String,
        reason: String,
        confidence: f64,
    },
    /// A whole course was replaced because its cultural fit was too low.
    DishReplacement {
        course: DishType,
        original_dish: String,
        replacement_dish: String,
        reason: String,
    },
}

/// A complete menu: exactly one starter, main course, dessert, and beverage.
///
/// Courses are owned copies of catalog dishes — substitutions never touch the
/// catalog. Totals are derived and recomputed by every course-changing
/// builder method; they are never set directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub starter: Dish,
    pub main_course: Dish,
    pub dessert: Dish,
    pub beverage: Beverage,
    /// Derived: sum of course prices plus the beverage.
    pub total_price: f64,
    /// Derived: sum of course calories (beverages don't count).
    pub total_calories: u32,
    #[serde(default)]
    pub dominant_style: Option<CulinaryStyle>,
    #[serde(default)]
    pub cultural_theme: Option<CulturalTradition>,
    /// Audit trail of cultural adaptations applied to this menu.
    #[serde(default)]
    pub cultural_adaptations: Vec<CulturalAdaptation>,
}

impl Menu {
    pub fn new(
        id: impl Into<String>,
        starter: Dish,
        main_course: Dish,
        dessert: Dish,
        beverage: Beverage,
    ) -> Self {
        let mut menu = Self {
            id: id.into(),
            starter,
            main_course,
            dessert,
            beverage,
            total_price: 0.0,
            total_calories: 0,
            dominant_style: None,
            cultural_theme: None,
            cultural_adaptations: Vec::new(),
        };
        menu.recompute_totals();
        menu
    }

    /// Recompute derived totals from the current courses.
    pub fn recompute_totals(&mut self) {
        self.total_price = self.starter.price
            + self.main_course.price
            + self.dessert.price
            + self.beverage.price;
        self.total_calories =
            self.starter.calories + self.main_course.calories + self.dessert.calories;
    }

    /// Replace a course, returning the updated menu with totals recomputed.
    pub fn with_course(mut self, course: DishType, dish: Dish) -> Self {
        match course {
            DishType::Starter => self.starter = dish,
            DishType::MainCourse => self.main_course = dish,
            DishType::Dessert => self.dessert = dish,
        }
        self.recompute_totals();
        self
    }

    pub fn with_starter(self, dish: Dish) -> Self {
        self.with_course(DishType::Starter, dish)
    }

    pub fn with_main_course(self, dish: Dish) -> Self {
        self.with_course(DishType::MainCourse, dish)
    }

    pub fn with_dessert(self, dish: Dish) -> Self {
        self.with_course(DishType::Dessert, dish)
    }

    pub fn with_beverage(mut self, beverage: Beverage) -> Self {
        self.beverage = beverage;
        self.recompute_totals();
        self
    }

    pub fn course(&self, course: DishType) -> &Dish {
        match course {
            DishType::Starter => &self.starter,
            DishType::MainCourse => &self.main_course,
            DishType::Dessert => &self.dessert,
        }
    }

    pub fn courses(&self) -> [(DishType, &Dish); 3] {
        [
            (DishType::Starter, &self.starter),
            (DishType::MainCourse, &self.main_course),
            (DishType::Dessert, &self.dessert),
        ]
    }

    /// Union of all course ingredients.
    pub fn ingredients(&self) -> BTreeSet<String> {
        self.courses()
            .iter()
            .flat_map(|(_, d)| d.ingredients.iter().cloned())
            .collect()
    }

    /// Diet labels satisfied by the whole menu: the intersection across
    /// courses.
    pub fn satisfied_diets(&self) -> BTreeSet<String> {
        let mut diets: BTreeSet<String> = self.starter.diets.iter().cloned().collect();
        diets.retain(|d| self.main_course.diets.contains(d));
        diets.retain(|d| self.dessert.diets.contains(d));
        diets
    }

    /// Whether every required diet label is satisfied by every course.
    pub fn meets_diets(&self, required: &[String]) -> bool {
        let diets = self.satisfied_diets();
        required.iter().all(|d| diets.contains(d))
    }

    /// Whether any course contains a restricted ingredient.
    pub fn contains_restricted(&self, restricted: &[String]) -> bool {
        self.courses()
            .iter()
            .any(|(_, d)| d.has_restricted_ingredient(restricted))
    }

    /// Smallest per-course serving capacity.
    pub fn min_capacity(&self) -> u32 {
        self.courses()
            .iter()
            .map(|(_, d)| d.max_guests)
            .min()
            .unwrap_or(0)
    }
}
