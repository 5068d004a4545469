use serde::{Deserialize, Serialize};

use super::defaults;

/// Revision subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionConfig {
    /// In strict mode any warning invalidates a menu.
    pub strict_mode: bool,
    /// Warnings tolerated before a menu is rejected.
    pub warning_budget: usize,
}

impl Default for RevisionConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            warning_budget: defaults::DEFAULT_WARNING_BUDGET,
        }
    }
}
