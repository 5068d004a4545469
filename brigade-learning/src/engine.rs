//! The weight learner: banded feedback analysis, clamped deltas,
//! renormalization, and an append-only snapshot history.

use chrono::Utc;
use tracing::info;

use brigade_core::config::LearningConfig;
use brigade_core::constants::WEIGHT_SUM_TOLERANCE;
use brigade_core::errors::{CbrResult, LearningError};
use brigade_core::menu::{Feedback, Menu, Request};
use brigade_core::models::{Criterion, LearningSnapshot, SimilarityWeights, WeightAdjustment};
use brigade_core::traits::IWeightLearner;
use brigade_knowledge::events::preferred_styles;
use brigade_knowledge::seasonal::is_calorie_count_appropriate;

use crate::scheduler::learning_rate_at;

/// Overall score below which the client is considered dissatisfied.
const LOW_BAND: f64 = 3.0;

/// Overall score at or above which the proposal clearly worked.
const HIGH_BAND: f64 = 4.0;

pub struct WeightLearner {
    weights: SimilarityWeights,
    config: LearningConfig,
    iteration: u64,
    history: Vec<LearningSnapshot>,
    adjustments: Vec<WeightAdjustment>,
}

impl WeightLearner {
    pub fn new(initial: SimilarityWeights, config: LearningConfig) -> Self {
        let mut weights = initial;
        weights.normalize();
        let mut learner = Self {
            weights,
            config,
            iteration: 0,
            history: Vec::new(),
            adjustments: Vec::new(),
        };
        learner.record_snapshot(0.0, vec!["initialized with starting weights".into()]);
        learner
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn adjustments(&self) -> &[WeightAdjustment] {
        &self.adjustments
    }

    /// Current learning rate under the configured schedule.
    pub fn current_learning_rate(&self) -> f64 {
        learning_rate_at(&self.config, self.iteration)
    }

    /// Requested deltas for one round of feedback, before clamping.
    fn plan_deltas(
        &self,
        feedback: &Feedback,
        request: &Request,
        menu: Option<&Menu>,
        lr: f64,
    ) -> Vec<(Criterion, f64, String)> {
        let mut deltas: Vec<(Criterion, f64, String)> = Vec::new();

        if feedback.overall < LOW_BAND {
            // Dissatisfied: boost whatever failed, shrink unrelated weight
            // to compensate.
            if feedback.price < LOW_BAND {
                deltas.push((
                    Criterion::PriceRange,
                    0.10 * lr,
                    "price missed expectations".into(),
                ));
                deltas.push((
                    Criterion::Season,
                    -0.05 * lr,
                    "compensating shrink for price boost".into(),
                ));
            }
            if feedback.cultural < LOW_BAND && request.cultural_preference.is_some() {
                deltas.push((
                    Criterion::Cultural,
                    0.08 * lr,
                    "requested culture not honored".into(),
                ));
                deltas.push((
                    Criterion::Guests,
                    -0.04 * lr,
                    "compensating shrink for cultural boost".into(),
                ));
            }
            if feedback.dietary < LOW_BAND {
                // Dietary failures hurt the most.
                deltas.push((
                    Criterion::Dietary,
                    0.12 * lr,
                    "dietary requirements not met".into(),
                ));
            }
            if let Some(menu) = menu {
                let preferred = preferred_styles(request.event_type);
                let menu_styles: Vec<_> = menu
                    .courses()
                    .iter()
                    .flat_map(|(_, d)| d.styles.iter().copied())
                    .collect();
                if !menu_styles.is_empty() && !menu_styles.iter().any(|s| preferred.contains(s)) {
                    deltas.push((
                        Criterion::Style,
                        0.08 * lr,
                        "menu style unsuited to the event".into(),
                    ));
                }
                if !is_calorie_count_appropriate(menu.total_calories, request.season) {
                    deltas.push((
                        Criterion::Season,
                        0.06 * lr,
                        "calorie load unsuited to the season".into(),
                    ));
                }
            }
        } else if feedback.overall >= HIGH_BAND {
            // Satisfied: reinforce what worked.
            if feedback.cultural >= HIGH_BAND && request.cultural_preference.is_some() {
                deltas.push((
                    Criterion::Cultural,
                    0.03 * lr,
                    "cultural match was valued".into(),
                ));
            }
            if feedback.price >= HIGH_BAND {
                deltas.push((
                    Criterion::PriceRange,
                    0.02 * lr,
                    "price fit was valued".into(),
                ));
            }
            if let Some(menu) = menu {
                let preferred = preferred_styles(request.event_type);
                let menu_styles: Vec<_> = menu
                    .courses()
                    .iter()
                    .flat_map(|(_, d)| d.styles.iter().copied())
                    .collect();
                if menu_styles.iter().any(|s| preferred.contains(s)) {
                    deltas.push((
                        Criterion::Style,
                        0.03 * lr,
                        "event-appropriate style worked".into(),
                    ));
                }
                if feedback.flavor >= HIGH_BAND
                    && is_calorie_count_appropriate(menu.total_calories, request.season)
                {
                    deltas.push((
                        Criterion::Season,
                        0.02 * lr,
                        "seasonal calorie fit worked".into(),
                    ));
                }
            }
            if feedback.flavor >= HIGH_BAND && request.wants_wine {
                deltas.push((
                    Criterion::WinePreference,
                    0.03 * lr,
                    "wine pairing worked".into(),
                ));
            }
            if feedback.dietary >= HIGH_BAND && !request.required_diets.is_empty() {
                deltas.push((
                    Criterion::Dietary,
                    0.03 * lr,
                    "dietary handling was valued".into(),
                ));
            }
            if request.num_guests > 100 {
                deltas.push((
                    Criterion::Guests,
                    0.02 * lr,
                    "large event handled well".into(),
                ));
            }
        } else {
            // Middle band: a small nudge toward the single worst-trailing
            // sub-dimension.
            let sub_scores = [
                (Criterion::PriceRange, feedback.price),
                (Criterion::Cultural, feedback.cultural),
                (Criterion::WinePreference, feedback.flavor),
                (Criterion::Dietary, feedback.dietary),
            ];
            if let Some((criterion, score)) = sub_scores
                .iter()
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            {
                if *score < feedback.overall {
                    deltas.push((
                        *criterion,
                        0.03 * lr,
                        "worst-trailing dimension nudged".into(),
                    ));
                }
            }
        }

        deltas
    }

    /// Clamp every weight into bounds and renormalize until both hold.
    fn clamp_and_normalize(&mut self) {
        for _ in 0..16 {
            for criterion in Criterion::ALL {
                let clamped = self
                    .weights
                    .weight(criterion)
                    .clamp(self.config.min_weight, self.config.max_weight);
                self.weights.set_weight(criterion, clamped);
            }
            if self.weights.is_normalized() {
                return;
            }
            self.weights.normalize();
        }
    }

    fn record_snapshot(&mut self, feedback_score: f64, reasons: Vec<String>) {
        let weights = Criterion::ALL
            .iter()
            .map(|c| (*c, self.weights.weight(*c)))
            .collect();
        self.history.push(LearningSnapshot {
            at: Utc::now(),
            iteration: self.iteration,
            weights,
            feedback_score,
            reasons,
        });
    }
}

impl IWeightLearner for WeightLearner {
    fn update(
        &mut self,
        feedback: &Feedback,
        request: &Request,
        menu: Option<&Menu>,
    ) -> CbrResult<Vec<WeightAdjustment>> {
        if !feedback.is_on_scale() {
            return Err(LearningError::InvalidFeedback {
                score: feedback.overall,
            }
            .into());
        }

        self.iteration += 1;
        let lr = learning_rate_at(&self.config, self.iteration);
        let planned = self.plan_deltas(feedback, request, menu, lr);

        let mut applied: Vec<WeightAdjustment> = Vec::new();
        let mut reasons: Vec<String> = Vec::new();
        for (criterion, delta, reason) in planned {
            let current = self.weights.weight(criterion);
            let next = (current + delta).clamp(self.config.min_weight, self.config.max_weight);
            self.weights.set_weight(criterion, next);
            let adjustment = WeightAdjustment {
                at: Utc::now(),
                criterion,
                // The REAL delta, after clamping.
                delta: next - current,
                reason: reason.clone(),
            };
            reasons.push(reason);
            applied.push(adjustment.clone());
            self.adjustments.push(adjustment);
        }

        self.clamp_and_normalize();

        if reasons.is_empty() {
            reasons.push("no adjustment for neutral feedback".into());
        }
        self.record_snapshot(feedback.overall, reasons);

        info!(
            iteration = self.iteration,
            adjustments = applied.len(),
            lr,
            "weights updated from feedback"
        );
        Ok(applied)
    }

    fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    fn history(&self) -> &[LearningSnapshot] {
        &self.history
    }
}
