//! Configuration for every subsystem, TOML-loadable with full defaults.

pub mod defaults;

mod adaptation_config;
mod learning_config;
mod retention_config;
mod retrieval_config;
mod revision_config;

pub use adaptation_config::AdaptationConfig;
pub use learning_config::{LearningConfig, LrSchedule};
pub use retention_config::RetentionConfig;
pub use retrieval_config::RetrievalConfig;
pub use revision_config::RevisionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CbrResult, ConfigError};

/// Top-level engine configuration. Every field has a default, so a partial
/// TOML file only overrides what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CbrConfig {
    pub retrieval: RetrievalConfig,
    pub adaptation: AdaptationConfig,
    pub revision: RevisionConfig,
    pub retention: RetentionConfig,
    pub learning: LearningConfig,
}

impl CbrConfig {
    /// Parse a TOML document, then sanity-check cross-field constraints.
    pub fn from_toml_str(input: &str) -> CbrResult<Self> {
        let config: CbrConfig = toml::from_str(input).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.learning.min_weight >= self.learning.max_weight {
            return Err(ConfigError::InvalidValue {
                field: "learning.min_weight".into(),
                reason: "must be below learning.max_weight".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.retrieval.diversity_weight) {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.diversity_weight".into(),
                reason: "must be in [0, 1]".into(),
            });
        }
        if self.retention.negative_threshold > self.retention.quality_threshold {
            return Err(ConfigError::InvalidValue {
                field: "retention.negative_threshold".into(),
                reason: "must not exceed retention.quality_threshold".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = CbrConfig::from_toml_str(
            r#"
            [retrieval]
            k = 8

            [retention]
            max_cases_per_event = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.retrieval.k, 8);
        assert_eq!(config.retention.max_cases_per_event, 25);
        // Untouched sections keep their defaults.
        assert_eq!(config.adaptation.max_price_swaps, 3);
        assert_eq!(config.learning.min_weight, 0.02);
    }

    #[test]
    fn inverted_weight_bounds_rejected() {
        let err = CbrConfig::from_toml_str(
            r#"
            [learning]
            min_weight = 0.6
            max_weight = 0.5
            "#,
        );
        assert!(err.is_err());
    }
}
