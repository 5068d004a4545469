use serde::{Deserialize, Serialize};

use super::defaults;

/// Adaptation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationConfig {
    /// How many adapted candidates to produce.
    pub max_proposals: usize,
    /// Ceiling on course swaps during price rebalancing.
    pub max_price_swaps: usize,
    /// Ceiling on from-scratch sampling attempts.
    pub max_generation_attempts: usize,
    /// Cultural fit below which a whole dish is replaced instead of
    /// substituting ingredients.
    pub dish_replace_threshold: f64,
    /// Combined similarity to a negative case above which a candidate is
    /// rejected outright.
    pub negative_similarity: f64,
    /// Seed for the generation RNG; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            max_proposals: defaults::DEFAULT_MAX_PROPOSALS,
            max_price_swaps: defaults::DEFAULT_MAX_PRICE_SWAPS,
            max_generation_attempts: defaults::DEFAULT_MAX_GENERATION_ATTEMPTS,
            dish_replace_threshold: defaults::DEFAULT_DISH_REPLACE_THRESHOLD,
            negative_similarity: defaults::DEFAULT_NEGATIVE_SIMILARITY,
            rng_seed: None,
        }
    }
}
