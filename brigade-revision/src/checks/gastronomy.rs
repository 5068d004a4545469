//! Gastronomic coherence: flavor harmony, category compatibility, and the
//! dessert after a fatty main.

use brigade_core::menu::{DishCategory, Flavor, Menu};
use brigade_core::models::{IssueCategory, ValidationIssue};
use brigade_knowledge::categories::are_categories_compatible;
use brigade_knowledge::flavor::any_flavor_harmony;

pub fn check_flavors(menu: &Menu) -> Vec<ValidationIssue> {
    if menu.starter.flavors.is_empty() || menu.main_course.flavors.is_empty() {
        return Vec::new();
    }
    if any_flavor_harmony(&menu.starter.flavors, &menu.main_course.flavors) {
        return Vec::new();
    }
    vec![ValidationIssue::warning(
        IssueCategory::Flavors,
        "starter and main course flavors may not harmonize",
    )
    .with_suggestion("look for courses with complementary flavors")]
}

pub fn check_categories(menu: &Menu) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if !are_categories_compatible(menu.starter.category, menu.main_course.category) {
        issues.push(
            ValidationIssue::error(
                IssueCategory::Categories,
                format!(
                    "incompatible categories: {:?} and {:?}",
                    menu.starter.category, menu.main_course.category
                ),
            )
            .with_suggestion("choose complementary course categories"),
        );
    }
    if !are_categories_compatible(menu.main_course.category, menu.dessert.category) {
        issues.push(ValidationIssue::warning(
            IssueCategory::Categories,
            "main course and dessert categories feel repetitive",
        ));
    }
    issues
}

pub fn check_dessert_after_fatty(menu: &Menu) -> Vec<ValidationIssue> {
    if !menu.main_course.flavors.contains(&Flavor::Fatty) {
        return Vec::new();
    }
    let dessert = &menu.dessert;
    let refreshing = dessert.category == DishCategory::Fruit
        || dessert.flavors.contains(&Flavor::Sour);
    let heavy =
        dessert.flavors.contains(&Flavor::Fatty) && dessert.flavors.contains(&Flavor::Sweet);
    if refreshing || !heavy {
        return Vec::new();
    }
    vec![ValidationIssue::warning(
        IssueCategory::Dessert,
        "a rich dessert after a fatty main course may feel heavy",
    )
    .with_suggestion("prefer a lighter or tarter dessert")]
}
