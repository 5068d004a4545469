//! Hard constraints: dietary compliance and allergen absence. Violations
//! here are always errors.

use brigade_core::menu::{Menu, Request};
use brigade_core::models::{IssueCategory, ValidationIssue};

pub fn check_diets(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    if request.required_diets.is_empty() {
        return Vec::new();
    }
    let satisfied = menu.satisfied_diets();
    let missing: Vec<&str> = request
        .required_diets
        .iter()
        .filter(|d| !satisfied.contains(*d))
        .map(String::as_str)
        .collect();
    if missing.is_empty() {
        return Vec::new();
    }
    vec![ValidationIssue::error(
        IssueCategory::Dietary,
        format!("required diets not met: {}", missing.join(", ")),
    )
    .with_suggestion("substitute courses that satisfy these diets")]
}

/// Soft preferences: unmet soft diets and present soft-avoided ingredients
/// are informational only — they never reject.
pub fn check_soft_preferences(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if !request.soft_diets.is_empty() {
        let satisfied = menu.satisfied_diets();
        let unmet: Vec<&str> = request
            .soft_diets
            .iter()
            .filter(|d| !satisfied.contains(*d))
            .map(String::as_str)
            .collect();
        if !unmet.is_empty() {
            issues.push(ValidationIssue::info(
                IssueCategory::Dietary,
                format!("preferred diets not covered: {}", unmet.join(", ")),
            ));
        }
    }
    if !request.soft_restricted_ingredients.is_empty() {
        let ingredients = menu.ingredients();
        let present: Vec<&str> = request
            .soft_restricted_ingredients
            .iter()
            .filter(|i| ingredients.contains(*i))
            .map(String::as_str)
            .collect();
        if !present.is_empty() {
            issues.push(ValidationIssue::info(
                IssueCategory::Ingredients,
                format!("ingredients the client would rather avoid: {}", present.join(", ")),
            ));
        }
    }
    issues
}

pub fn check_allergens(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    if request.restricted_ingredients.is_empty() {
        return Vec::new();
    }
    let ingredients = menu.ingredients();
    let present: Vec<&str> = request
        .restricted_ingredients
        .iter()
        .filter(|i| ingredients.contains(*i))
        .map(String::as_str)
        .collect();
    if present.is_empty() {
        return Vec::new();
    }
    vec![ValidationIssue::error(
        IssueCategory::Ingredients,
        format!("restricted ingredients present: {}", present.join(", ")),
    )
    .with_suggestion("remove every dish containing these ingredients")]
}
