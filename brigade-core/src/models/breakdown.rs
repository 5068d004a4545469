use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::weights::Criterion;

/// Per-criterion similarity scores plus the weighted total.
///
/// Plain structured data handed to the explanation collaborator — nothing
/// here is rendering-specific.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    /// Raw sub-score per criterion, each in [0, 1].
    pub scores: BTreeMap<Criterion, f64>,
    /// Weighted total in [0, 1].
    pub total: f64,
    /// Diagnostic annotations (e.g. cultural adaptability). Never used for
    /// ranking.
    pub annotations: BTreeMap<String, f64>,
}

impl SimilarityBreakdown {
    pub fn score(&self, criterion: Criterion) -> Option<f64> {
        self.scores.get(&criterion).copied()
    }
}
