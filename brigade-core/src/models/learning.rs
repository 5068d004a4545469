use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::weights::Criterion;

/// One applied weight adjustment. The delta is the REAL change after
/// clamping, not the requested one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightAdjustment {
    pub at: DateTime<Utc>,
    pub criterion: Criterion,
    pub delta: f64,
    pub reason: String,
}

/// Immutable snapshot of the learner state after one update.
///
/// The history of snapshots is the audit trail handed to plotting/analysis
/// collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningSnapshot {
    pub at: DateTime<Utc>,
    pub iteration: u64,
    /// Full weight vector at snapshot time.
    pub weights: BTreeMap<Criterion, f64>,
    pub feedback_score: f64,
    pub reasons: Vec<String>,
}
