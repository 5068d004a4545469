use serde::{Deserialize, Serialize};

use crate::constants::{FEEDBACK_MAX, FEEDBACK_MIN};

/// Client feedback for a served menu, on the 1-5 scale.
///
/// Carries per-dimension sub-scores so the weight learner can tell WHICH
/// aspect drove the overall judgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub overall: f64,
    pub price: f64,
    pub cultural: f64,
    pub flavor: f64,
    pub dietary: f64,
    pub success: bool,
    #[serde(default)]
    pub comment: String,
}

impl Feedback {
    /// Whether every score sits inside the 1-5 scale.
    pub fn is_on_scale(&self) -> bool {
        [self.overall, self.price, self.cultural, self.flavor, self.dietary]
            .iter()
            .all(|s| (FEEDBACK_MIN..=FEEDBACK_MAX).contains(s))
    }

    /// Uniform feedback where every dimension shares the overall score.
    pub fn uniform(overall: f64, success: bool) -> Self {
        Self {
            overall,
            price: overall,
            cultural: overall,
            flavor: overall,
            dietary: overall,
            success,
            comment: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_check() {
        assert!(Feedback::uniform(4.5, true).is_on_scale());
        assert!(!Feedback::uniform(0.5, false).is_on_scale());
    }
}
