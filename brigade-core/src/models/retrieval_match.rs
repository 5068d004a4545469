use serde::{Deserialize, Serialize};

use super::breakdown::SimilarityBreakdown;
use crate::menu::Case;

/// One ranked retrieval result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalMatch {
    pub case: Case,
    pub similarity: f64,
    pub breakdown: SimilarityBreakdown,
    /// 1-based rank in the returned list.
    pub rank: usize,
}

/// A negative case similar enough to the request to warrant a warning.
/// Non-blocking: proposals still go out, flagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegativeWarning {
    pub case_id: String,
    pub similarity: f64,
    /// The failure comment recorded on the negative case.
    pub comment: String,
}
