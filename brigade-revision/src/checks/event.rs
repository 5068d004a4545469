//! Event-fit validation: main-course complexity against event expectations.

use brigade_core::menu::{Menu, Request};
use brigade_core::models::{IssueCategory, ValidationIssue};
use brigade_knowledge::events::is_complexity_appropriate;

pub fn check_complexity(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    if is_complexity_appropriate(
        menu.main_course.complexity,
        request.event_type,
        request.price_max,
    ) {
        return Vec::new();
    }
    vec![ValidationIssue::warning(
        IssueCategory::Complexity,
        format!(
            "complexity {:?} may not suit a {:?} event",
            menu.main_course.complexity, request.event_type
        ),
    )
    .with_suggestion("match preparation complexity to the event")]
}
