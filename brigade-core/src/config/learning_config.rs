use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning-rate decay schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LrSchedule {
    /// Constant learning rate.
    Constant,
    /// `lr = initial * decay^iteration`, floored at `lr_min`.
    Exponential,
    /// Linear decay to `lr_min` over 100 iterations.
    Linear,
    /// `lr = initial * decay^(iteration / 10)`, floored at `lr_min`.
    Step,
}

/// Weight learner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    pub learning_rate: f64,
    /// Clamp bounds for any single weight.
    pub min_weight: f64,
    pub max_weight: f64,
    pub schedule: LrSchedule,
    pub lr_decay_rate: f64,
    pub lr_min: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            min_weight: defaults::DEFAULT_MIN_WEIGHT,
            max_weight: defaults::DEFAULT_MAX_WEIGHT,
            schedule: LrSchedule::Constant,
            lr_decay_rate: defaults::DEFAULT_LR_DECAY_RATE,
            lr_min: defaults::DEFAULT_LR_MIN,
        }
    }
}
