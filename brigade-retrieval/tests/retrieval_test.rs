use std::sync::Arc;

use brigade_core::config::RetrievalConfig;
use brigade_core::menu::{CulturalTradition, EventType, Season};
use brigade_core::models::SimilarityWeights;
use brigade_core::traits::IRetriever;
use brigade_knowledge::KnowledgeBase;
use brigade_retrieval::Retriever;
use brigade_similarity::SimilarityEngine;

fn engine() -> SimilarityEngine {
    SimilarityEngine::new(
        Arc::new(KnowledgeBase::builtin()),
        SimilarityWeights::default(),
    )
}

#[test]
fn wedding_request_retrieves_wedding_cases_first() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());

    let matches = retriever
        .retrieve(&store, &test_fixtures::wedding_request(), 5)
        .unwrap();

    assert!(!matches.is_empty());
    assert_eq!(matches[0].case.request.event_type, EventType::Wedding);
    assert_eq!(matches[0].rank, 1);
    // Ranked descending.
    for pair in matches.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn negative_cases_never_surface_as_candidates() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());

    let matches = retriever
        .retrieve(&store, &test_fixtures::wedding_request(), 20)
        .unwrap();
    assert!(matches.iter().all(|m| !m.case.negative));
}

#[test]
fn allergen_filter_has_no_fallback() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());

    let mut request = test_fixtures::wedding_request();
    // Beef appears in every wedding-priced main in the fixture set.
    request.restricted_ingredients = vec!["beef".into()];

    let matches = retriever.retrieve(&store, &request, 10).unwrap();
    for m in &matches {
        assert!(!m.case.menu.contains_restricted(&request.restricted_ingredients));
    }
}

#[test]
fn dietary_filter_falls_back_when_pool_starves() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());

    let mut request = test_fixtures::wedding_request();
    // No wedding seed case is fully vegan, so the strict filter would leave
    // nothing; the fallback keeps the pool alive for adaptation.
    request.required_diets = vec!["vegan".into()];

    let matches = retriever.retrieve(&store, &request, 5).unwrap();
    assert!(!matches.is_empty());
}

#[test]
fn exact_culture_match_gets_boosted() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());

    let request = test_fixtures::make_request(
        EventType::Christening,
        Season::Spring,
        50,
        Some(45.0),
        Some(60.0),
        true,
        None,
        Some(CulturalTradition::Catalan),
        &[],
    );

    let matches = retriever.retrieve(&store, &request, 3).unwrap();
    let top = &matches[0];
    assert_eq!(top.case.id, "christening-regional-001");
    assert_eq!(top.breakdown.annotations.get("cultural_match"), Some(&1.0));
}

#[test]
fn differing_culture_gets_adaptability_annotation() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());

    let request = test_fixtures::make_request(
        EventType::Familiar,
        Season::Summer,
        30,
        Some(20.0),
        Some(36.0),
        false,
        None,
        Some(CulturalTradition::Japanese),
        &[],
    );

    let matches = retriever.retrieve(&store, &request, 5).unwrap();
    assert!(matches.iter().any(|m| m
        .breakdown
        .annotations
        .contains_key("cultural_adaptability")));
}

#[test]
fn diverse_retrieval_spreads_menus() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());
    let request = test_fixtures::wedding_request();

    let plain = retriever.retrieve(&store, &request, 3).unwrap();
    let diverse = retriever.retrieve_diverse(&store, &request, 3).unwrap();

    assert_eq!(diverse.len(), 3);
    // The top pick is stable across both modes.
    assert_eq!(plain[0].case.id, diverse[0].case.id);
}

#[test]
fn similar_negative_case_raises_a_warning() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let retriever = Retriever::new(&similarity, RetrievalConfig::default());

    // Close to the documented winter-wedding failure.
    let request = test_fixtures::make_request(
        EventType::Wedding,
        Season::Winter,
        120,
        Some(40.0),
        Some(60.0),
        false,
        None,
        None,
        &[],
    );

    let warnings = retriever.check_negative_cases(&store, &request);
    assert!(warnings.iter().any(|w| w.case_id == "wedding-winter-neg-001"));
}
