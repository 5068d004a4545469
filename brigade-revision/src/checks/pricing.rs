//! Price-in-band and price-proportion sanity checks.

use brigade_core::menu::{Menu, Request};
use brigade_core::models::{IssueCategory, PriceBucket, ValidationIssue};
use brigade_knowledge::pricing::validate_price_proportions;

/// Below the minimum is a warning (the client pays less than planned);
/// above the maximum is an error (the budget is a hard ceiling).
pub fn check_price(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if let Some(min) = request.price_min {
        if menu.total_price < min {
            issues.push(
                ValidationIssue::warning(
                    IssueCategory::Price,
                    format!(
                        "total {:.2} below the requested minimum {min:.2}",
                        menu.total_price
                    ),
                )
                .with_suggestion("consider premium alternatives to reach the budget"),
            );
        }
    }
    if let Some(max) = request.price_max {
        if menu.total_price > max {
            issues.push(
                ValidationIssue::error(
                    IssueCategory::Price,
                    format!(
                        "total {:.2} exceeds the requested maximum {max:.2}",
                        menu.total_price
                    ),
                )
                .with_suggestion("swap in cheaper courses"),
            );
        }
    }
    issues
}

/// The main course should anchor the menu price.
pub fn check_proportions(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    let bucket = PriceBucket::classify(menu.total_price, request.price_min, request.price_max);
    let proportions_ok = validate_price_proportions(
        menu.starter.price,
        menu.main_course.price,
        menu.dessert.price,
        bucket,
        0.25,
    );
    let mut issues = Vec::new();
    if !proportions_ok && menu.starter.price > menu.main_course.price {
        issues.push(
            ValidationIssue::warning(
                IssueCategory::Proportions,
                "the starter outprices the main course",
            )
            .with_suggestion("the main course should be the centerpiece"),
        );
    }
    issues
}
