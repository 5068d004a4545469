//! Maximal-marginal-relevance re-selection for diversified retrieval.

use brigade_core::models::RetrievalMatch;
use brigade_similarity::menu_similarity;

/// Greedily re-select `k` results trading relevance against similarity to
/// already-picked candidates. `diversity_weight` is the MMR lambda: 0 keeps
/// pure relevance order, 1 maximizes spread.
pub fn mmr_select(
    mut candidates: Vec<RetrievalMatch>,
    k: usize,
    diversity_weight: f64,
) -> Vec<RetrievalMatch> {
    if candidates.len() <= k {
        return candidates;
    }

    // The most similar candidate is always kept.
    let mut selected = vec![candidates.remove(0)];

    while selected.len() < k && !candidates.is_empty() {
        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (index, candidate) in candidates.iter().enumerate() {
            let max_to_selected = selected
                .iter()
                .map(|s| menu_similarity(&candidate.case.menu, &s.case.menu))
                .fold(0.0, f64::max);
            let mmr = (1.0 - diversity_weight) * candidate.similarity
                - diversity_weight * max_to_selected;
            if mmr > best_score {
                best_score = mmr;
                best_index = index;
            }
        }

        selected.push(candidates.remove(best_index));
    }

    for (index, result) in selected.iter_mut().enumerate() {
        result.rank = index + 1;
    }
    selected
}
