//! Periodic redundancy pruning per event bucket.
//!
//! Positive cases above the redundancy threshold collapse to their
//! highest-utility member. Negative cases prune at a stricter threshold and
//! keep the WORST-scoring member — the most representative record of the
//! failure. When no redundant group exists, a flat utility-ranked cut
//! applies.

use chrono::Utc;
use tracing::info;

use brigade_core::config::RetentionConfig;
use brigade_core::errors::CbrResult;
use brigade_core::menu::{Case, EventType};
use brigade_core::traits::ICaseStore;
use brigade_similarity::{combined_case_similarity, SimilarityEngine};

/// Utility of a case for pruning decisions: feedback dominates, usage is
/// log-damped, recency earns a small credit.
pub fn case_utility(case: &Case) -> f64 {
    let mut utility = case.outcome.score * 10.0;
    utility += 8.0 * (1.0 + case.usage_count as f64).ln();
    if case.outcome.success {
        utility += 10.0;
    }
    if let Some(last_used) = case.last_used {
        let days = (Utc::now() - last_used).num_days().max(0) as f64;
        utility += (20.0 - days).max(0.0);
    }
    utility
}

/// Prune one event bucket back under capacity. Returns the removed count.
pub fn prune_event_bucket(
    store: &mut dyn ICaseStore,
    similarity: &SimilarityEngine,
    event: EventType,
    config: &RetentionConfig,
) -> CbrResult<usize> {
    let bucket = store.cases_by_event(event);
    if bucket.len() <= config.max_cases_per_event {
        return Ok(0);
    }

    let positives: Vec<Case> = bucket.iter().filter(|c| !c.negative).cloned().collect();
    let negatives: Vec<Case> = bucket.iter().filter(|c| c.negative).cloned().collect();

    let mut to_remove: Vec<String> = Vec::new();
    to_remove.extend(redundant_ids(
        similarity,
        &positives,
        config.redundancy_threshold,
        // Positives keep the best member.
        |group| {
            group.sort_by(|a, b| {
                case_utility(b)
                    .partial_cmp(&case_utility(a))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        },
    ));
    to_remove.extend(redundant_ids(
        similarity,
        &negatives,
        config.negative_redundancy_threshold,
        // Negatives keep the worst score: the clearest record of what went
        // wrong.
        |group| {
            group.sort_by(|a, b| {
                a.outcome
                    .score
                    .partial_cmp(&b.outcome.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        },
    ));

    if to_remove.is_empty() {
        // No redundant groups despite the overflow: fall back to a flat
        // utility-ranked cut.
        let mut ranked = bucket.clone();
        ranked.sort_by(|a, b| {
            case_utility(b)
                .partial_cmp(&case_utility(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        to_remove = ranked
            .iter()
            .skip(config.max_cases_per_event)
            .map(|c| c.id.clone())
            .collect();
        info!(
            event = ?event,
            removed = to_remove.len(),
            "no redundant groups; flat utility cut applied"
        );
    } else {
        info!(event = ?event, removed = to_remove.len(), "redundant cases pruned");
    }

    let removed = store.remove_cases(&to_remove)?;
    store.rebuild_indices();
    Ok(removed)
}

/// Group cases by mutual combined similarity above `threshold`; the keeper
/// ordering decides which member of each group survives (index 0 stays).
fn redundant_ids(
    similarity: &SimilarityEngine,
    cases: &[Case],
    threshold: f64,
    order_group: impl Fn(&mut Vec<&Case>),
) -> Vec<String> {
    let mut to_remove: Vec<String> = Vec::new();
    let mut grouped: Vec<bool> = vec![false; cases.len()];

    for i in 0..cases.len() {
        if grouped[i] {
            continue;
        }
        let mut group: Vec<&Case> = vec![&cases[i]];
        for j in (i + 1)..cases.len() {
            if grouped[j] {
                continue;
            }
            let combined = combined_case_similarity(
                similarity,
                &cases[i].request,
                &cases[i].menu,
                &cases[j],
            );
            if combined >= threshold {
                group.push(&cases[j]);
                grouped[j] = true;
            }
        }
        grouped[i] = true;

        if group.len() > 1 {
            order_group(&mut group);
            to_remove.extend(group.iter().skip(1).map(|c| c.id.clone()));
        }
    }
    to_remove
}
