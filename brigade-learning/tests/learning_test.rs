use brigade_core::config::{LearningConfig, LrSchedule};
use brigade_core::menu::{Feedback, Request};
use brigade_core::models::{Criterion, SimilarityWeights};
use brigade_core::traits::{ICaseStore, IWeightLearner};
use brigade_learning::WeightLearner;

fn learner() -> WeightLearner {
    WeightLearner::new(SimilarityWeights::default(), LearningConfig::default())
}

fn feedback(overall: f64, price: f64, cultural: f64, flavor: f64, dietary: f64) -> Feedback {
    Feedback {
        overall,
        price,
        cultural,
        flavor,
        dietary,
        success: overall >= 3.0,
        comment: String::new(),
    }
}

#[test]
fn dietary_failure_boosts_the_dietary_weight() {
    let mut l = learner();
    let before = l.weights().dietary;
    let mut request = Request::default();
    request.required_diets = vec!["vegan".into()];

    let adjustments = l
        .update(&feedback(2.0, 4.0, 4.0, 4.0, 1.5), &request, None)
        .unwrap();

    assert!(adjustments
        .iter()
        .any(|a| a.criterion == Criterion::Dietary && a.delta > 0.0));
    assert!(l.weights().dietary > before);
    assert!(l.weights().is_normalized());
}

#[test]
fn price_failure_boosts_price_and_shrinks_season() {
    let mut l = learner();
    let season_before = l.weights().season;
    let price_before = l.weights().price_range;

    l.update(&feedback(2.5, 1.5, 4.0, 4.0, 4.0), &Request::default(), None)
        .unwrap();

    assert!(l.weights().price_range > price_before);
    assert!(l.weights().season < season_before);
}

#[test]
fn high_feedback_reinforces_what_worked() {
    let mut l = learner();
    let price_before = l.weights().price_range;
    let mut request = Request::default();
    request.wants_wine = true;

    let adjustments = l
        .update(&feedback(4.8, 4.5, 3.0, 4.6, 3.5), &request, None)
        .unwrap();

    assert!(l.weights().price_range > price_before * 0.99);
    assert!(adjustments
        .iter()
        .any(|a| a.criterion == Criterion::WinePreference && a.delta > 0.0));
}

#[test]
fn middle_band_nudges_the_worst_dimension() {
    let mut l = learner();
    let cultural_before = l.weights().cultural;
    let mut request = Request::default();
    request.cultural_preference = Some(brigade_core::menu::CulturalTradition::Italian);

    // Cultural trails every other dimension.
    let adjustments = l
        .update(&feedback(3.5, 3.6, 2.8, 3.7, 3.8), &request, None)
        .unwrap();

    assert_eq!(adjustments.len(), 1);
    assert_eq!(adjustments[0].criterion, Criterion::Cultural);
    assert!(l.weights().cultural > cultural_before - 1e-9);
}

#[test]
fn off_scale_feedback_is_rejected() {
    let mut l = learner();
    let result = l.update(&feedback(0.0, 4.0, 4.0, 4.0, 4.0), &Request::default(), None);
    assert!(result.is_err());
}

#[test]
fn history_grows_by_one_immutable_snapshot_per_update() {
    let mut l = learner();
    assert_eq!(l.history().len(), 1); // initialization snapshot

    for i in 0..5 {
        l.update(
            &feedback(4.5, 4.5, 4.5, 4.5, 4.5),
            &Request::default(),
            None,
        )
        .unwrap();
        assert_eq!(l.history().len(), 2 + i);
    }
    // Iterations recorded monotonically.
    let iterations: Vec<u64> = l.history().iter().map(|s| s.iteration).collect();
    assert_eq!(iterations, vec![0, 1, 2, 3, 4, 5]);
    // Snapshots carry the full nine-weight vector.
    assert_eq!(l.history().last().unwrap().weights.len(), 9);
}

#[test]
fn weights_stay_normalized_and_bounded_over_many_updates() {
    let config = LearningConfig::default();
    let mut l = WeightLearner::new(SimilarityWeights::default(), config.clone());
    let store = test_fixtures::seeded_store();
    let case = store.get_case("wedding-gourmet-001").unwrap();

    let rounds = [
        feedback(1.5, 1.0, 1.0, 2.0, 1.0),
        feedback(4.9, 4.9, 4.9, 4.9, 4.9),
        feedback(3.2, 3.0, 3.5, 3.1, 3.4),
        feedback(2.0, 4.0, 1.0, 4.0, 1.0),
        feedback(4.2, 4.5, 4.4, 4.1, 4.0),
    ];

    let mut request = case.request.clone();
    request.required_diets = vec!["vegetarian".into()];
    request.cultural_preference = Some(brigade_core::menu::CulturalTradition::Italian);

    for round in rounds.iter().cycle().take(50) {
        l.update(round, &request, Some(&case.menu)).unwrap();
        let weights = l.weights();
        assert!(
            (weights.sum() - 1.0).abs() <= 1e-6,
            "sum drifted to {}",
            weights.sum()
        );
        for c in Criterion::ALL {
            let w = weights.weight(c);
            assert!(
                w >= config.min_weight - 1e-9 && w <= config.max_weight + 1e-9,
                "{c:?} out of bounds: {w}"
            );
        }
    }
}

#[test]
fn decaying_schedule_shrinks_adjustments_over_time() {
    let config = LearningConfig {
        schedule: LrSchedule::Exponential,
        ..LearningConfig::default()
    };
    let mut l = WeightLearner::new(SimilarityWeights::default(), config);

    let mut request = Request::default();
    request.required_diets = vec!["vegan".into()];
    let fb = feedback(2.0, 4.0, 4.0, 4.0, 1.0);

    let first = l.update(&fb, &request, None).unwrap();
    for _ in 0..30 {
        l.update(&fb, &request, None).unwrap();
    }
    let late = l.update(&fb, &request, None).unwrap();

    let first_delta = first
        .iter()
        .find(|a| a.criterion == Criterion::Dietary)
        .map(|a| a.delta.abs())
        .unwrap();
    let late_delta = late
        .iter()
        .find(|a| a.criterion == Criterion::Dietary)
        .map(|a| a.delta.abs())
        .unwrap();
    assert!(late_delta < first_delta);
}
