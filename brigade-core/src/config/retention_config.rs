use serde::{Deserialize, Serialize};

use super::defaults;

/// Retention subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Below this combined similarity a good case is novel enough to store
    /// unconditionally.
    pub novelty_threshold: f64,
    /// Feedback at or above this is worth retaining as a positive case.
    pub quality_threshold: f64,
    /// Feedback below this is retained as a negative case.
    pub negative_threshold: f64,
    /// Mutual similarity above which positive cases are redundant.
    pub redundancy_threshold: f64,
    /// Stricter redundancy bar for negative cases.
    pub negative_redundancy_threshold: f64,
    /// Per-event-type capacity before maintenance prunes.
    pub max_cases_per_event: usize,
    /// Insertions between maintenance passes.
    pub maintenance_interval: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            novelty_threshold: defaults::DEFAULT_NOVELTY_THRESHOLD,
            quality_threshold: defaults::DEFAULT_QUALITY_THRESHOLD,
            negative_threshold: defaults::DEFAULT_NEGATIVE_THRESHOLD,
            redundancy_threshold: defaults::DEFAULT_REDUNDANCY_THRESHOLD,
            negative_redundancy_threshold: defaults::DEFAULT_NEGATIVE_REDUNDANCY_THRESHOLD,
            max_cases_per_event: defaults::DEFAULT_MAX_CASES_PER_EVENT,
            maintenance_interval: defaults::DEFAULT_MAINTENANCE_INTERVAL,
        }
    }
}
