//! Seasonal checks: starter temperature and calorie load.

use brigade_core::menu::{Menu, Request, Season};
use brigade_core::models::{IssueCategory, ValidationIssue};
use brigade_knowledge::seasonal::{
    calorie_range, is_calorie_count_appropriate, is_starter_temperature_appropriate,
};

pub fn check_temperature(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    if request.season == Season::Any
        || is_starter_temperature_appropriate(menu.starter.temperature, request.season)
    {
        return Vec::new();
    }
    vec![ValidationIssue::warning(
        IssueCategory::Temperature,
        format!(
            "starter temperature {:?} is not ideal for {:?}",
            menu.starter.temperature, request.season
        ),
    )
    .with_suggestion("choose a starter with a season-appropriate temperature")]
}

pub fn check_calories(menu: &Menu, request: &Request) -> Vec<ValidationIssue> {
    if request.season == Season::Any
        || is_calorie_count_appropriate(menu.total_calories, request.season)
    {
        return Vec::new();
    }
    let (min, _) = calorie_range(request.season);
    let message = if menu.total_calories < min {
        format!(
            "light menu ({} kcal) for {:?}",
            menu.total_calories, request.season
        )
    } else {
        format!(
            "heavy menu ({} kcal) for {:?}",
            menu.total_calories, request.season
        )
    };
    vec![ValidationIssue::info(IssueCategory::Calories, message)]
}
