use std::sync::Arc;

use brigade_core::menu::{CulturalTradition, EventType, Season};
use brigade_core::models::{Criterion, SimilarityWeights};
use brigade_core::traits::{ICaseStore, ICulturalEmbedder};
use brigade_core::CbrResult;
use brigade_knowledge::KnowledgeBase;
use brigade_similarity::{combined_case_similarity, SimilarityEngine};

fn engine() -> SimilarityEngine {
    SimilarityEngine::new(
        Arc::new(KnowledgeBase::builtin()),
        SimilarityWeights::default(),
    )
}

#[test]
fn matching_wedding_case_outranks_unrelated_events() {
    let e = engine();
    let store = test_fixtures::seeded_store();
    let request = test_fixtures::wedding_request();

    let wedding = store.get_case("wedding-gourmet-001").unwrap();
    let corporate = store.get_case("corporate-modern-001").unwrap();

    assert!(e.similarity(&request, &wedding) > e.similarity(&request, &corporate));
}

#[test]
fn breakdown_carries_every_criterion() {
    let e = engine();
    let store = test_fixtures::seeded_store();
    let request = test_fixtures::wedding_request();
    let case = store.get_case("wedding-gourmet-001").unwrap();

    let breakdown = e.breakdown(&request, &case);
    for c in Criterion::ALL {
        assert!(breakdown.score(c).is_some(), "{c:?} missing from breakdown");
    }
    // In-band price and matching event for this pair.
    assert_eq!(breakdown.score(Criterion::PriceRange), Some(1.0));
    assert_eq!(breakdown.score(Criterion::EventType), Some(1.0));
}

#[test]
fn menu_similarity_masks_the_success_bonus() {
    let e = engine();
    let store = test_fixtures::seeded_store();
    let request = test_fixtures::wedding_request();
    let case = store.get_case("wedding-gourmet-001").unwrap();

    // Scoring the same menu as a bare menu must not profit from the stored
    // case's feedback.
    let with_case = e.similarity(&request, &case);
    let menu_only = e.similarity_to_menu(&request, &case.menu);
    assert!((0.0..=1.0).contains(&menu_only));
    // The stored case carries a 4.8 success bonus, so it scores higher.
    assert!(with_case >= menu_only - 1e-9);
}

#[test]
fn combined_similarity_blends_request_and_menu_sides() {
    let e = engine();
    let store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-gourmet-001").unwrap();

    let self_combined =
        combined_case_similarity(&e, &case.request, &case.menu, &case);
    let other = store.get_case("familiar-classic-001").unwrap();
    let cross_combined =
        combined_case_similarity(&e, &case.request, &case.menu, &other);
    assert!(self_combined > cross_combined);
}

struct FixedEmbedder;

impl ICulturalEmbedder for FixedEmbedder {
    fn embed(&self, tradition: CulturalTradition) -> CbrResult<Vec<f32>> {
        // Orthogonal axes per tradition family, deterministic.
        let axis = match tradition {
            CulturalTradition::Italian | CulturalTradition::Spanish => [1.0, 0.2, 0.0],
            CulturalTradition::Japanese => [0.0, 0.0, 1.0],
            _ => [0.5, 0.5, 0.5],
        };
        Ok(axis.to_vec())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[test]
fn embedder_refines_cultural_scores() {
    let store = test_fixtures::seeded_store();
    let e = engine().with_embedder(Arc::new(FixedEmbedder));

    let mut request = test_fixtures::make_request(
        EventType::Wedding,
        Season::Summer,
        100,
        Some(50.0),
        Some(90.0),
        true,
        None,
        Some(CulturalTradition::Italian),
        &[],
    );
    request.cultural_preference = Some(CulturalTradition::Italian);

    // Mediterranean-themed wedding case: embedder places Italian close to
    // the catch-all axis, far from Japanese.
    let case = store.get_case("wedding-mediterranean-004").unwrap();
    let b = e.breakdown(&request, &case);
    let cultural = b.score(Criterion::Cultural).unwrap();
    assert!((0.0..=1.0).contains(&cultural));
    assert!(cultural > 0.5);
}
