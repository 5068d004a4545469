use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;

/// The nine similarity criteria.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    EventType,
    Season,
    PriceRange,
    Style,
    Cultural,
    Dietary,
    Guests,
    WinePreference,
    SuccessBonus,
}

impl Criterion {
    pub const ALL: [Criterion; 9] = [
        Criterion::EventType,
        Criterion::Season,
        Criterion::PriceRange,
        Criterion::Style,
        Criterion::Cultural,
        Criterion::Dietary,
        Criterion::Guests,
        Criterion::WinePreference,
        Criterion::SuccessBonus,
    ];
}

/// Weights for the nine similarity criteria. The sole persistent learned
/// state of the engine.
///
/// Always owned per logical session and passed explicitly — never a hidden
/// global. Per-call masking operates on a derived copy; the base vector is
/// only mutated by the weight learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    pub event_type: f64,
    pub season: f64,
    pub price_range: f64,
    pub style: f64,
    pub cultural: f64,
    pub dietary: f64,
    pub guests: f64,
    pub wine_preference: f64,
    pub success_bonus: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            event_type: 0.20,
            season: 0.12,
            price_range: 0.18,
            style: 0.12,
            cultural: 0.08,
            dietary: 0.15,
            guests: 0.05,
            wine_preference: 0.05,
            success_bonus: 0.05,
        }
    }
}

impl SimilarityWeights {
    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::EventType => self.event_type,
            Criterion::Season => self.season,
            Criterion::PriceRange => self.price_range,
            Criterion::Style => self.style,
            Criterion::Cultural => self.cultural,
            Criterion::Dietary => self.dietary,
            Criterion::Guests => self.guests,
            Criterion::WinePreference => self.wine_preference,
            Criterion::SuccessBonus => self.success_bonus,
        }
    }

    pub fn set_weight(&mut self, criterion: Criterion, value: f64) {
        let slot = match criterion {
            Criterion::EventType => &mut self.event_type,
            Criterion::Season => &mut self.season,
            Criterion::PriceRange => &mut self.price_range,
            Criterion::Style => &mut self.style,
            Criterion::Cultural => &mut self.cultural,
            Criterion::Dietary => &mut self.dietary,
            Criterion::Guests => &mut self.guests,
            Criterion::WinePreference => &mut self.wine_preference,
            Criterion::SuccessBonus => &mut self.success_bonus,
        };
        *slot = value;
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.weight(*c)).sum()
    }

    /// Scale the vector so it sums to 1. A degenerate all-zero vector is left
    /// untouched.
    pub fn normalize(&mut self) {
        let total = self.sum();
        if total > 0.0 {
            for c in Criterion::ALL {
                self.set_weight(c, self.weight(c) / total);
            }
        }
    }

    /// Whether the vector sums to 1 within tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Derived copy with the given criteria zeroed and the rest renormalized.
    ///
    /// Used for per-call masking of unspecified request fields; the base
    /// vector is never touched.
    pub fn masked(&self, zeroed: &[Criterion]) -> Self {
        let mut masked = self.clone();
        for c in zeroed {
            masked.set_weight(*c, 0.0);
        }
        masked.normalize();
        masked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_normalized() {
        assert!(SimilarityWeights::default().is_normalized());
    }

    #[test]
    fn masking_renormalizes_a_copy() {
        let base = SimilarityWeights::default();
        let masked = base.masked(&[Criterion::Cultural, Criterion::Dietary]);
        assert_eq!(masked.cultural, 0.0);
        assert_eq!(masked.dietary, 0.0);
        assert!(masked.is_normalized());
        // Base untouched.
        assert_eq!(base.cultural, 0.08);
    }

    #[test]
    fn normalize_recovers_from_drift() {
        let mut w = SimilarityWeights::default();
        w.event_type = 0.5;
        w.normalize();
        assert!(w.is_normalized());
    }
}
