use std::sync::Arc;

use brigade_core::config::RetentionConfig;
use brigade_core::menu::{EventType, Feedback};
use brigade_core::models::{RetentionAction, SimilarityWeights};
use brigade_core::traits::{ICaseStore, IRetainer};
use brigade_knowledge::KnowledgeBase;
use brigade_retention::{case_utility, Retainer};
use brigade_similarity::SimilarityEngine;
use brigade_store::CaseStore;

fn similarity() -> SimilarityEngine {
    SimilarityEngine::new(
        Arc::new(KnowledgeBase::builtin()),
        SimilarityWeights::default(),
    )
}

fn retainer() -> Retainer {
    Retainer::new(similarity(), RetentionConfig::default())
}

fn feedback(overall: f64) -> Feedback {
    Feedback {
        success: overall >= 3.0,
        ..Feedback::uniform(overall, overall >= 3.0)
    }
}

#[test]
fn failure_is_always_stored_as_negative() {
    let mut store = test_fixtures::seeded_store();
    let before = store.case_count();
    let case = store.get_case("wedding-gourmet-001").unwrap();

    let decision = retainer()
        .retain(&mut store, &case.request, &case.menu, &feedback(2.0))
        .unwrap();

    assert_eq!(decision.action, RetentionAction::StoreNegative);
    assert!(decision.stored);
    assert_eq!(store.case_count(), before + 1);
    let stored = store.get_case(decision.case_id.as_ref().unwrap()).unwrap();
    assert!(stored.negative);
    assert!(!stored.outcome.success);
}

#[test]
fn ambiguous_middle_band_is_discarded() {
    let mut store = test_fixtures::seeded_store();
    let before = store.case_count();
    let case = store.get_case("wedding-gourmet-001").unwrap();

    let decision = retainer()
        .retain(&mut store, &case.request, &case.menu, &feedback(3.2))
        .unwrap();

    assert_eq!(decision.action, RetentionAction::Discard);
    assert!(!decision.stored);
    assert_eq!(store.case_count(), before);
}

#[test]
fn novel_success_is_stored_as_new() {
    let mut store = CaseStore::new(
        test_fixtures::catalog_dishes(),
        test_fixtures::catalog_beverages(),
    );
    let seeded = test_fixtures::seeded_store();
    let case = seeded.get_case("corporate-vegan-002").unwrap();

    let decision = retainer()
        .retain(&mut store, &case.request, &case.menu, &feedback(4.5))
        .unwrap();

    assert_eq!(decision.action, RetentionAction::StoreNew);
    assert!(decision.stored);
    assert_eq!(store.case_count(), 1);
}

#[test]
fn resubmitting_with_better_feedback_updates_instead_of_duplicating() {
    let mut store = CaseStore::new(
        test_fixtures::catalog_dishes(),
        test_fixtures::catalog_beverages(),
    );
    let seeded = test_fixtures::seeded_store();
    let case = seeded.get_case("wedding-gourmet-001").unwrap();
    let mut r = retainer();

    let first = r
        .retain(&mut store, &case.request, &case.menu, &feedback(4.5))
        .unwrap();
    assert_eq!(first.action, RetentionAction::StoreNew);
    assert_eq!(store.case_count(), 1);

    let second = r
        .retain(&mut store, &case.request, &case.menu, &feedback(4.7))
        .unwrap();
    assert_eq!(second.action, RetentionAction::UpdateExisting);
    assert!(second.stored);
    // Update, not a duplicate insert.
    assert_eq!(store.case_count(), 1);

    let updated = store.get_case(second.case_id.as_ref().unwrap()).unwrap();
    assert!(updated.outcome.score > 4.5);
    assert_eq!(updated.usage_count, 1);
    assert!(!updated.notes.is_empty());
}

#[test]
fn worse_near_duplicate_is_discarded_as_redundant() {
    let mut store = CaseStore::new(
        test_fixtures::catalog_dishes(),
        test_fixtures::catalog_beverages(),
    );
    let seeded = test_fixtures::seeded_store();
    let case = seeded.get_case("wedding-gourmet-001").unwrap();
    let mut r = retainer();

    r.retain(&mut store, &case.request, &case.menu, &feedback(4.7))
        .unwrap();
    let second = r
        .retain(&mut store, &case.request, &case.menu, &feedback(4.0))
        .unwrap();

    assert_eq!(second.action, RetentionAction::Discard);
    assert_eq!(store.case_count(), 1);
}

#[test]
fn off_scale_feedback_is_rejected() {
    let mut store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-gourmet-001").unwrap();
    let result = retainer().retain(&mut store, &case.request, &case.menu, &feedback(7.0));
    assert!(result.is_err());
}

#[test]
fn maintenance_prunes_redundant_cases_over_capacity() {
    let mut store = CaseStore::new(
        test_fixtures::catalog_dishes(),
        test_fixtures::catalog_beverages(),
    );
    let seeded = test_fixtures::seeded_store();
    let case = seeded.get_case("wedding-gourmet-001").unwrap();

    let config = RetentionConfig {
        max_cases_per_event: 2,
        maintenance_interval: 1,
        // Force every submission in as a new case.
        novelty_threshold: 0.999,
        ..RetentionConfig::default()
    };
    let mut r = Retainer::new(similarity(), config);

    for score in [4.5, 4.55, 4.6, 4.65] {
        r.retain(&mut store, &case.request, &case.menu, &feedback(score))
            .unwrap();
    }

    let bucket = store.cases_by_event(EventType::Wedding);
    assert!(
        bucket.len() <= 2,
        "bucket not pruned: {} cases",
        bucket.len()
    );
}

#[test]
fn utility_ranks_feedback_usage_and_recency() {
    let seeded = test_fixtures::seeded_store();
    let mut strong = seeded.get_case("wedding-gourmet-001").unwrap();
    let mut weak = strong.clone();

    strong.usage_count = 20;
    strong.last_used = Some(chrono::Utc::now());
    weak.outcome.score = 3.6;
    weak.usage_count = 0;
    weak.last_used = None;

    assert!(case_utility(&strong) > case_utility(&weak));
}
