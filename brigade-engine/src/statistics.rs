//! Diagnostic statistics over the store and the similarity distribution.

use std::collections::BTreeMap;

use serde::Serialize;

use brigade_core::menu::{EventType, Request};
use brigade_core::traits::ICaseStore;
use brigade_similarity::SimilarityEngine;

/// Composition of the case store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatistics {
    pub total_cases: usize,
    pub positive_cases: usize,
    pub negative_cases: usize,
    pub successful_cases: usize,
    pub average_feedback: f64,
    pub cases_by_event: BTreeMap<EventType, usize>,
}

pub fn store_statistics(store: &dyn ICaseStore) -> StoreStatistics {
    let cases = store.all_cases();
    let total = cases.len();
    let negative = cases.iter().filter(|c| c.negative).count();
    let successful = cases.iter().filter(|c| c.outcome.success).count();
    let average_feedback = if total == 0 {
        0.0
    } else {
        cases.iter().map(|c| c.outcome.score).sum::<f64>() / total as f64
    };
    let mut by_event: BTreeMap<EventType, usize> = BTreeMap::new();
    for case in &cases {
        *by_event.entry(case.request.event_type).or_default() += 1;
    }
    StoreStatistics {
        total_cases: total,
        positive_cases: total - negative,
        negative_cases: negative,
        successful_cases: successful,
        average_feedback,
        cases_by_event: by_event,
    }
}

/// Distribution of similarity scores for one request over the whole store.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalStatistics {
    pub total_cases: usize,
    pub max_similarity: f64,
    pub min_similarity: f64,
    pub average_similarity: f64,
    pub median_similarity: f64,
    pub top_similarities: Vec<f64>,
}

pub fn retrieval_statistics(
    store: &dyn ICaseStore,
    similarity: &SimilarityEngine,
    request: &Request,
) -> RetrievalStatistics {
    let mut scores: Vec<f64> = store
        .all_cases()
        .iter()
        .map(|case| similarity.similarity(request, case))
        .collect();
    scores.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let total = scores.len();
    let (max, min, average, median) = if total == 0 {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        (
            scores[0],
            scores[total - 1],
            scores.iter().sum::<f64>() / total as f64,
            scores[total / 2],
        )
    };
    RetrievalStatistics {
        total_cases: total,
        max_similarity: max,
        min_similarity: min,
        average_similarity: average,
        median_similarity: median,
        top_similarities: scores.into_iter().take(5).collect(),
    }
}
