use std::sync::Arc;

use brigade_core::config::RevisionConfig;
use brigade_core::menu::{EventType, Season};
use brigade_core::models::{IssueCategory, IssueSeverity, ValidationStatus};
use brigade_core::traits::{ICaseStore, IReviser};
use brigade_knowledge::KnowledgeBase;
use brigade_revision::Reviser;

fn reviser() -> Reviser {
    Reviser::new(Arc::new(KnowledgeBase::builtin()), RevisionConfig::default())
}

fn strict_reviser() -> Reviser {
    Reviser::new(
        Arc::new(KnowledgeBase::builtin()),
        RevisionConfig {
            strict_mode: true,
            warning_budget: 3,
        },
    )
}

#[test]
fn well_matched_seed_menu_validates() {
    let store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-gourmet-001").unwrap();
    let report = reviser().validate(&case.menu, &case.request).unwrap();

    assert!(report.is_valid(), "issues: {:?}", report.issues);
    assert!(report.score > 50.0);
}

#[test]
fn over_budget_menu_is_invalid() {
    let store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-gourmet-001").unwrap();
    let mut request = case.request.clone();
    request.price_max = Some(60.0);

    let report = reviser().validate(&case.menu, &request).unwrap();
    assert_eq!(report.status, ValidationStatus::Invalid);
    assert!(report
        .issues
        .iter()
        .any(|i| i.severity == IssueSeverity::Error && i.category == IssueCategory::Price));
    assert!(report.rejection_reason().is_some());
}

#[test]
fn unmet_diet_is_a_hard_error() {
    let store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-gourmet-001").unwrap();
    let mut request = case.request.clone();
    request.required_diets = vec!["vegan".into()];

    let report = reviser().validate(&case.menu, &request).unwrap();
    assert_eq!(report.status, ValidationStatus::Invalid);
    assert!(report
        .issues
        .iter()
        .any(|i| i.category == IssueCategory::Dietary));
}

#[test]
fn allergen_presence_is_a_hard_error() {
    let store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-sibarita-002").unwrap();
    let mut request = case.request.clone();
    request.restricted_ingredients = vec!["beef".into()];

    let report = reviser().validate(&case.menu, &request).unwrap();
    assert_eq!(report.status, ValidationStatus::Invalid);
    assert!(report
        .issues
        .iter()
        .any(|i| i.category == IssueCategory::Ingredients));
}

#[test]
fn strict_mode_rejects_any_warning() {
    let store = test_fixtures::seeded_store();
    // Winter request against a cold-starter summer menu: warnings, no
    // errors.
    let case = store.get_case("familiar-summer-002").unwrap();
    let mut request = case.request.clone();
    request.season = Season::Winter;
    request.price_min = None;
    request.price_max = None;

    let lenient = reviser().validate(&case.menu, &request).unwrap();
    let strict = strict_reviser().validate(&case.menu, &request).unwrap();

    assert!(lenient.count(IssueSeverity::Warning) > 0);
    assert!(lenient.count(IssueSeverity::Error) == 0);
    assert!(lenient.is_valid());
    assert_eq!(strict.status, ValidationStatus::Invalid);
}

#[test]
fn scores_spread_across_menus() {
    let store = test_fixtures::seeded_store();
    let reviser = reviser();

    // The same menu judged against matched vs mismatched requests must
    // land far apart.
    let matched = store.get_case("wedding-gourmet-001").unwrap();
    let good = reviser
        .validate(&matched.menu, &matched.request)
        .unwrap()
        .score;

    let mut hostile = matched.request.clone();
    hostile.event_type = EventType::Familiar;
    hostile.season = Season::Winter;
    hostile.price_max = Some(40.0);
    hostile.required_diets = vec!["vegan".into()];
    let bad = reviser.validate(&matched.menu, &hostile).unwrap().score;

    assert!(good - bad > 20.0, "good {good} vs bad {bad}");
}

#[test]
fn historical_feedback_adds_a_small_bonus() {
    let store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-gourmet-001").unwrap();
    let r = reviser();

    let plain = r.validate(&case.menu, &case.request).unwrap().score;
    let with_history = r
        .validate_with_history(&case.menu, &case.request, Some(5.0))
        .unwrap()
        .score;
    assert!(with_history >= plain);
    assert!(with_history - plain <= 5.0 + 1e-9);
}
