//! The weighted quality score. Component scores live in [0, 1]; the final
//! score spreads over [0, 100] instead of clustering near a single value.

use brigade_core::menu::{Menu, Request};
use brigade_core::models::{IssueSeverity, ValidationIssue};
use brigade_knowledge::categories::{are_categories_compatible, is_good_progression};
use brigade_knowledge::events::{is_complexity_appropriate, is_style_appropriate};
use brigade_knowledge::flavor::any_flavor_harmony;
use brigade_knowledge::IngredientCatalog;

const WEIGHT_COMPLIANCE: f64 = 0.30;
const WEIGHT_GASTRONOMY: f64 = 0.20;
const WEIGHT_CULTURE: f64 = 0.15;
const WEIGHT_EVENT_FIT: f64 = 0.15;
const WEIGHT_PRICE: f64 = 0.20;

/// Maximum historical-feedback bonus on top of the weighted composite.
const MAX_FEEDBACK_BONUS: f64 = 5.0;

pub fn quality_score(
    menu: &Menu,
    request: &Request,
    issues: &[ValidationIssue],
    catalog: &IngredientCatalog,
    source_feedback: Option<f64>,
) -> f64 {
    let compliance = compliance_score(issues);
    let gastronomy = gastronomy_score(menu);
    let culture = culture_score(menu, request, catalog);
    let event_fit = event_fit_score(menu, request);
    let price = price_efficiency(menu, request);

    let composite = WEIGHT_COMPLIANCE * compliance
        + WEIGHT_GASTRONOMY * gastronomy
        + WEIGHT_CULTURE * culture
        + WEIGHT_EVENT_FIT * event_fit
        + WEIGHT_PRICE * price;

    let bonus = source_feedback
        .map(|score| (score / 5.0) * MAX_FEEDBACK_BONUS)
        .unwrap_or(0.0);

    (composite * 100.0 + bonus).clamp(0.0, 100.0)
}

fn compliance_score(issues: &[ValidationIssue]) -> f64 {
    let mut score: f64 = 1.0;
    for issue in issues {
        score -= match issue.severity {
            IssueSeverity::Error => 0.5,
            IssueSeverity::Warning => 0.15,
            IssueSeverity::Info => 0.05,
        };
    }
    score.max(0.0)
}

fn gastronomy_score(menu: &Menu) -> f64 {
    let mut points = 0.0;
    if any_flavor_harmony(&menu.starter.flavors, &menu.main_course.flavors) {
        points += 1.0;
    }
    if are_categories_compatible(menu.starter.category, menu.main_course.category) {
        points += 1.0;
    }
    if are_categories_compatible(menu.main_course.category, menu.dessert.category) {
        points += 1.0;
    }
    if is_good_progression(menu.starter.category, menu.main_course.category) {
        points += 1.0;
    }
    points / 4.0
}

fn culture_score(menu: &Menu, request: &Request, catalog: &IngredientCatalog) -> f64 {
    let Some(target) = request.cultural_preference else {
        return 0.8;
    };
    if menu.cultural_theme == Some(target) {
        return 1.0;
    }
    let fits: Vec<f64> = menu
        .courses()
        .iter()
        .filter(|(_, d)| !d.ingredients.is_empty())
        .map(|(_, d)| catalog.cultural_fit(&d.ingredients, target))
        .collect();
    if fits.is_empty() {
        return 0.5;
    }
    fits.iter().sum::<f64>() / fits.len() as f64
}

fn event_fit_score(menu: &Menu, request: &Request) -> f64 {
    let style_ok = match menu.dominant_style {
        Some(style) => is_style_appropriate(style, request.event_type),
        None => menu
            .courses()
            .iter()
            .any(|(_, d)| d.styles.iter().any(|s| is_style_appropriate(*s, request.event_type))),
    };
    let complexity_ok = is_complexity_appropriate(
        menu.main_course.complexity,
        request.event_type,
        request.price_max,
    );
    let style_part = if style_ok { 1.0 } else { 0.4 };
    let complexity_part = if complexity_ok { 1.0 } else { 0.4 };
    (style_part + complexity_part) / 2.0
}

/// 1.0 at the band center, 0.5 at its edges, 0.1 outside.
fn price_efficiency(menu: &Menu, request: &Request) -> f64 {
    if !request.has_price_band() {
        return 0.8;
    }
    if !request.price_in_band(menu.total_price) {
        return 0.1;
    }
    match (request.band_center(), request.band_width()) {
        (Some(center), Some(width)) if width > 0.0 => {
            let deviation = (menu.total_price - center).abs() / (width / 2.0);
            1.0 - deviation.min(1.0) * 0.5
        }
        _ => 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::models::IssueCategory;

    #[test]
    fn errors_cost_more_than_warnings() {
        let error = vec![ValidationIssue::error(IssueCategory::Price, "over")];
        let warning = vec![ValidationIssue::warning(IssueCategory::Price, "under")];
        assert!(compliance_score(&error) < compliance_score(&warning));
    }

    #[test]
    fn compliance_never_goes_negative() {
        let issues: Vec<ValidationIssue> = (0..5)
            .map(|_| ValidationIssue::error(IssueCategory::Dietary, "missing"))
            .collect();
        assert_eq!(compliance_score(&issues), 0.0);
    }
}
