//! Default values for every tunable parameter, in one place.

// Retrieval
pub const DEFAULT_K: usize = 5;
pub const DEFAULT_MAX_CANDIDATES: usize = 50;
pub const DEFAULT_MIN_VIABLE_POOL: usize = 1;
pub const DEFAULT_DIVERSITY_WEIGHT: f64 = 0.3;
pub const DEFAULT_NEGATIVE_WARNING_THRESHOLD: f64 = 0.80;
pub const DEFAULT_PREFILTER_PRICE_MARGIN: f64 = 0.20;

// Adaptation
pub const DEFAULT_MAX_PROPOSALS: usize = 3;
pub const DEFAULT_MAX_PRICE_SWAPS: usize = 3;
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: usize = 50;
pub const DEFAULT_DISH_REPLACE_THRESHOLD: f64 = 0.40;
pub const DEFAULT_NEGATIVE_SIMILARITY: f64 = 0.85;

// Revision
pub const DEFAULT_WARNING_BUDGET: usize = 3;

// Retention
pub const DEFAULT_NOVELTY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_QUALITY_THRESHOLD: f64 = 3.5;
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = 3.0;
pub const DEFAULT_REDUNDANCY_THRESHOLD: f64 = 0.90;
pub const DEFAULT_NEGATIVE_REDUNDANCY_THRESHOLD: f64 = 0.95;
pub const DEFAULT_MAX_CASES_PER_EVENT: usize = 50;
pub const DEFAULT_MAINTENANCE_INTERVAL: u64 = 10;

// Learning
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;
pub const DEFAULT_MIN_WEIGHT: f64 = 0.02;
pub const DEFAULT_MAX_WEIGHT: f64 = 0.50;
pub const DEFAULT_LR_DECAY_RATE: f64 = 0.95;
pub const DEFAULT_LR_MIN: f64 = 0.001;
