use serde::{Deserialize, Serialize};

use crate::menu::Menu;

/// Pipeline stage that produced an adaptation note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationStage {
    Dietary,
    Allergen,
    Price,
    Seasonal,
    Beverage,
    Cultural,
    Style,
    Generated,
}

/// One adaptation performed on a candidate menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationNote {
    pub stage: AdaptationStage,
    pub detail: String,
    /// True for residual shortfalls the pipeline could not fully fix
    /// (e.g. price drift after the swap budget ran out).
    #[serde(default)]
    pub warning: bool,
}

impl AdaptationNote {
    pub fn new(stage: AdaptationStage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
            warning: false,
        }
    }

    pub fn warning(stage: AdaptationStage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
            warning: true,
        }
    }
}

/// Position of a proposal's price inside the request band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBucket {
    Economy,
    Mid,
    Premium,
}

impl PriceBucket {
    /// Classify a total price by its position inside a band. Degenerate
    /// bands classify as `Mid`.
    pub fn classify(total: f64, price_min: Option<f64>, price_max: Option<f64>) -> Self {
        match (price_min, price_max) {
            (Some(lo), Some(hi)) if hi > lo => {
                let position = (total - lo) / (hi - lo);
                if position < 1.0 / 3.0 {
                    PriceBucket::Economy
                } else if position < 2.0 / 3.0 {
                    PriceBucket::Mid
                } else {
                    PriceBucket::Premium
                }
            }
            _ => PriceBucket::Mid,
        }
    }
}

/// An adapted candidate menu, ready for revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptedCandidate {
    pub menu: Menu,
    /// Source case, `None` for from-scratch generated menus.
    pub source_case_id: Option<String>,
    pub notes: Vec<AdaptationNote>,
    /// Similarity of the source case before adaptation (0 for generated).
    pub pre_similarity: f64,
    /// True similarity of (request, adapted menu), recomputed after the
    /// pipeline. This is the ranking value — the pre-adaptation score is
    /// stale once courses change.
    pub post_similarity: f64,
    pub price_bucket: PriceBucket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_by_band_position() {
        assert_eq!(
            PriceBucket::classify(85.0, Some(80.0), Some(120.0)),
            PriceBucket::Economy
        );
        assert_eq!(
            PriceBucket::classify(100.0, Some(80.0), Some(120.0)),
            PriceBucket::Mid
        );
        assert_eq!(
            PriceBucket::classify(115.0, Some(80.0), Some(120.0)),
            PriceBucket::Premium
        );
        assert_eq!(PriceBucket::classify(40.0, None, None), PriceBucket::Mid);
    }
}
