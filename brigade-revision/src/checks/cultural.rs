//! Cultural-fit validation, only when the request names a tradition.

use brigade_core::menu::{Menu, Request};
use brigade_core::models::{IssueCategory, ValidationIssue};
use brigade_knowledge::IngredientCatalog;

pub fn check_culture(
    menu: &Menu,
    request: &Request,
    catalog: &IngredientCatalog,
) -> Vec<ValidationIssue> {
    let Some(target) = request.cultural_preference else {
        return Vec::new();
    };
    if menu.cultural_theme == Some(target) {
        return Vec::new();
    }

    let fits: Vec<f64> = menu
        .courses()
        .iter()
        .filter(|(_, d)| !d.ingredients.is_empty())
        .map(|(_, d)| catalog.cultural_fit(&d.ingredients, target))
        .collect();
    if fits.is_empty() {
        return Vec::new();
    }
    let average = fits.iter().sum::<f64>() / fits.len() as f64;

    let mut issues = Vec::new();
    if average >= 0.6 {
        // Well adapted even without an explicit theme: nothing to flag.
    } else if average >= 0.4 {
        issues.push(ValidationIssue::info(
            IssueCategory::Culture,
            format!("moderate cultural adaptation ({:.0}%)", average * 100.0),
        ));
    } else {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Culture,
                format!("limited cultural adaptation ({:.0}%)", average * 100.0),
            )
            .with_suggestion("consider dishes more representative of the tradition"),
        );
    }
    issues
}
