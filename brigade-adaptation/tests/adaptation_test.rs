use std::sync::Arc;

use brigade_adaptation::Adapter;
use brigade_core::config::{AdaptationConfig, RetrievalConfig};
use brigade_core::menu::{
    CaseOutcome, Complexity, CulturalTradition, Dish, DishCategory, DishType, EventType, Flavor,
    Season, Temperature,
};
use brigade_core::models::SimilarityWeights;
use brigade_core::traits::{IAdapter, ICaseStore, IRetriever};
use brigade_knowledge::KnowledgeBase;
use brigade_retrieval::Retriever;
use brigade_similarity::SimilarityEngine;
use brigade_store::{CaseStore, SeedCase};

fn engine() -> SimilarityEngine {
    SimilarityEngine::new(
        Arc::new(KnowledgeBase::builtin()),
        SimilarityWeights::default(),
    )
}

fn seeded_config() -> AdaptationConfig {
    AdaptationConfig {
        rng_seed: Some(7),
        max_generation_attempts: 200,
        ..AdaptationConfig::default()
    }
}

fn retrieve_and_adapt(
    store: &CaseStore,
    similarity: &SimilarityEngine,
    request: &brigade_core::menu::Request,
    n: usize,
) -> Vec<brigade_core::models::AdaptedCandidate> {
    let retriever = Retriever::new(similarity, RetrievalConfig::default());
    let matches = retriever.retrieve(store, request, 5).unwrap();
    let mut adapter = Adapter::new(similarity, seeded_config());
    adapter.adapt(store, &matches, request, n).unwrap()
}

#[test]
fn conforming_menu_adapts_to_itself() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    // The stored request of this case already matches its menu exactly.
    let case = store.get_case("wedding-gourmet-001").unwrap();

    let results = retrieve_and_adapt(&store, &similarity, &case.request, 1);
    let top = &results[0];

    assert_eq!(top.source_case_id.as_deref(), Some("wedding-gourmet-001"));
    assert!(top.notes.is_empty(), "unexpected notes: {:?}", top.notes);
    assert_eq!(top.menu.starter.id, case.menu.starter.id);
    assert_eq!(top.menu.main_course.id, case.menu.main_course.id);
    assert_eq!(top.menu.dessert.id, case.menu.dessert.id);
    assert_eq!(top.menu.beverage.id, case.menu.beverage.id);
    assert_eq!(top.menu.total_price, case.menu.total_price);
}

#[test]
fn totals_stay_consistent_through_any_substitution() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();

    let mut request = test_fixtures::wedding_request();
    request.required_diets = vec!["vegetarian".into()];
    let results = retrieve_and_adapt(&store, &similarity, &request, 3);

    for candidate in &results {
        let menu = &candidate.menu;
        let expected_price = menu.starter.price
            + menu.main_course.price
            + menu.dessert.price
            + menu.beverage.price;
        let expected_calories =
            menu.starter.calories + menu.main_course.calories + menu.dessert.calories;
        assert!((menu.total_price - expected_price).abs() < 1e-9);
        assert_eq!(menu.total_calories, expected_calories);
    }
}

#[test]
fn allergen_invariant_holds_on_every_path() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();

    let mut request = test_fixtures::wedding_request();
    request.restricted_ingredients = vec!["beef".into(), "almonds".into()];
    let results = retrieve_and_adapt(&store, &similarity, &request, 3);

    for candidate in &results {
        assert!(
            !candidate.menu.contains_restricted(&request.restricted_ingredients),
            "allergen slipped through in {}",
            candidate.menu.id
        );
    }
}

#[test]
fn price_rebalance_pulls_expensive_menus_into_band() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();

    // Budget well below the gourmet wedding cases.
    let request = test_fixtures::make_request(
        EventType::Wedding,
        Season::Summer,
        100,
        Some(50.0),
        Some(70.0),
        true,
        None,
        None,
        &[],
    );
    let results = retrieve_and_adapt(&store, &similarity, &request, 3);

    assert!(!results.is_empty());
    // Every result either landed in the band or carries an explicit
    // residual-drift warning.
    for candidate in &results {
        let in_band = request.price_in_band(candidate.menu.total_price);
        let has_warning = candidate.notes.iter().any(|n| n.warning);
        assert!(in_band || has_warning);
    }
    assert!(results
        .iter()
        .any(|c| request.price_in_band(c.menu.total_price)));
}

fn custom_dish(
    id: &str,
    dish_type: DishType,
    price: f64,
    category: DishCategory,
    ingredients: &[&str],
    diets: &[&str],
) -> Dish {
    Dish {
        id: id.into(),
        name: id.into(),
        dish_type,
        price,
        category,
        styles: vec![],
        seasons: vec![Season::Any],
        temperature: Temperature::Hot,
        complexity: Complexity::Medium,
        calories: 300,
        max_guests: 300,
        flavors: vec![Flavor::Salty, Flavor::Umami],
        diets: diets.iter().map(|d| d.to_string()).collect(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        compatible_beverages: vec![],
        cultural_traditions: vec![],
    }
}

fn single_case_store(dishes: Vec<Dish>, courses: (&str, &str, &str)) -> CaseStore {
    let beverages = test_fixtures::catalog_beverages();
    let request = test_fixtures::make_request(
        EventType::Familiar,
        Season::Any,
        40,
        Some(20.0),
        Some(60.0),
        false,
        None,
        None,
        &[],
    );
    let seed = SeedCase {
        id: "only-case".into(),
        request,
        starter_id: courses.0.into(),
        main_course_id: courses.1.into(),
        dessert_id: courses.2.into(),
        beverage_id: "still-water".into(),
        dominant_style: None,
        cultural_theme: None,
        outcome: CaseOutcome {
            success: true,
            score: 4.5,
            comment: String::new(),
        },
        negative: false,
        usage_count: 0,
        created_at: None,
        last_used: None,
    };
    CaseStore::from_seed(dishes, beverages, vec![seed]).unwrap()
}

#[test]
fn vegan_request_is_satisfied_by_ingredient_substitution() {
    // No fully-vegan case exists, but every violating ingredient has a
    // same-group vegan stand-in (cheese and butter both do).
    let store = test_fixtures::seeded_store();
    let similarity = engine();

    let mut request = test_fixtures::make_request(
        EventType::Familiar,
        Season::Summer,
        30,
        Some(20.0),
        Some(40.0),
        false,
        None,
        None,
        &["vegan"],
    );
    request.required_diets = vec!["vegan".into()];

    let results = retrieve_and_adapt(&store, &similarity, &request, 3);
    assert!(!results.is_empty());
    for candidate in &results {
        assert!(
            candidate.menu.meets_diets(&request.required_diets),
            "menu {} is not vegan after adaptation",
            candidate.menu.id
        );
    }
}

#[test]
fn vegan_request_fails_when_no_substitute_exists() {
    // Salmon has no vegan stand-in inside the fish group, and the catalog
    // holds no vegan-compliant starter to regenerate from.
    let dishes = vec![
        custom_dish(
            "salmon-toast",
            DishType::Starter,
            12.0,
            DishCategory::Fish,
            &["salmon", "breadcrumbs"],
            &["pescatarian"],
        ),
        custom_dish(
            "plain-bowl",
            DishType::MainCourse,
            18.0,
            DishCategory::Legume,
            &["lentils", "onion"],
            &["vegan", "vegetarian"],
        ),
        custom_dish(
            "fruit-cup",
            DishType::Dessert,
            6.0,
            DishCategory::Fruit,
            &["apple", "sugar"],
            &["vegan", "vegetarian"],
        ),
    ];
    let store = single_case_store(dishes, ("salmon-toast", "plain-bowl", "fruit-cup"));
    let similarity = engine();

    let request = test_fixtures::make_request(
        EventType::Familiar,
        Season::Any,
        40,
        Some(20.0),
        Some(60.0),
        false,
        None,
        None,
        &["vegan"],
    );

    let results = retrieve_and_adapt(&store, &similarity, &request, 3);
    assert!(
        results.is_empty(),
        "expected zero proposals, got {}",
        results.len()
    );
}

#[test]
fn cultural_retheme_replaces_dishes_far_off_theme() {
    // A heavily Moroccan main against a Japanese request sits below the
    // replacement threshold; the Japanese alternative takes over.
    let mut dishes = vec![
        custom_dish(
            "lamb-tagine",
            DishType::MainCourse,
            21.0,
            DishCategory::Meat,
            &["lamb", "couscous", "dates", "cumin"],
            &[],
        ),
        test_fixtures::fixture_dish("miso-glazed-tofu"),
        test_fixtures::fixture_dish("gazpacho"),
        test_fixtures::fixture_dish("fruit-salad-mint"),
    ];
    dishes[2].seasons = vec![Season::Any];
    dishes[3].seasons = vec![Season::Any];
    let store = single_case_store(dishes, ("gazpacho", "lamb-tagine", "fruit-salad-mint"));
    let similarity = engine();

    let mut request = test_fixtures::make_request(
        EventType::Familiar,
        Season::Any,
        40,
        Some(20.0),
        Some(60.0),
        false,
        None,
        None,
        &[],
    );
    request.cultural_preference = Some(CulturalTradition::Japanese);

    let results = retrieve_and_adapt(&store, &similarity, &request, 1);
    assert!(!results.is_empty());
    let menu = &results[0].menu;

    assert_eq!(menu.cultural_theme, Some(CulturalTradition::Japanese));
    assert_eq!(menu.main_course.id, "miso-glazed-tofu");
    assert!(menu.cultural_adaptations.iter().any(|a| matches!(
        a,
        brigade_core::menu::CulturalAdaptation::DishReplacement { .. }
    )));
}

#[test]
fn generation_fills_in_when_no_cases_survive() {
    let store = test_fixtures::seeded_store();
    let similarity = engine();
    let request = test_fixtures::wedding_request();

    // No retrieved candidates at all: everything must come from generation.
    let mut adapter = Adapter::new(&similarity, seeded_config());
    let results = adapter.adapt(&store, &[], &request, 2).unwrap();

    assert!(!results.is_empty());
    for candidate in &results {
        assert!(candidate.source_case_id.is_none());
        assert!(request.price_in_band(candidate.menu.total_price));
    }
}
