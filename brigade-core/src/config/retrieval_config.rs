use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// How many ranked cases to return.
    pub k: usize,
    /// Cap on candidates scored in detail.
    pub max_candidates: usize,
    /// Below this many dietary survivors the dietary filter is skipped and
    /// adaptation is left to fix compliance.
    pub min_viable_pool: usize,
    /// MMR trade-off for diversified retrieval (0 = pure relevance).
    pub diversity_weight: f64,
    /// Similarity above which a negative case becomes a warning.
    pub negative_warning_threshold: f64,
    /// Band margin used by the price index pre-filter.
    pub prefilter_price_margin: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            k: defaults::DEFAULT_K,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            min_viable_pool: defaults::DEFAULT_MIN_VIABLE_POOL,
            diversity_weight: defaults::DEFAULT_DIVERSITY_WEIGHT,
            negative_warning_threshold: defaults::DEFAULT_NEGATIVE_WARNING_THRESHOLD,
            prefilter_price_margin: defaults::DEFAULT_PREFILTER_PRICE_MARGIN,
        }
    }
}
