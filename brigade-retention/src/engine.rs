//! The retention engine: decision logic plus the maintenance trigger.

use chrono::Utc;
use tracing::{debug, info};

use brigade_core::config::RetentionConfig;
use brigade_core::errors::{CbrResult, RetentionError};
use brigade_core::menu::{Case, CaseOutcome, CaseSource, Feedback, Menu, Request};
use brigade_core::models::{RetentionAction, RetentionDecision};
use brigade_core::traits::{ICaseStore, IRetainer};
use brigade_similarity::{combined_case_similarity, SimilarityEngine};

use crate::maintenance::prune_event_bucket;

/// The retention engine. Owns its similarity engine (refreshed with learned
/// weights by the session) and the maintenance counter.
pub struct Retainer {
    similarity: SimilarityEngine,
    config: RetentionConfig,
    inserts_since_maintenance: u64,
}

impl Retainer {
    pub fn new(similarity: SimilarityEngine, config: RetentionConfig) -> Self {
        Self {
            similarity,
            config,
            inserts_since_maintenance: 0,
        }
    }

    /// Push retuned weights into the retainer's similarity engine.
    pub fn set_weights(&mut self, weights: brigade_core::models::SimilarityWeights) {
        self.similarity.set_weights(weights);
    }

    /// Pure decision, no store mutation.
    pub fn evaluate(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
        menu: &Menu,
        feedback: &Feedback,
    ) -> RetentionDecision {
        if feedback.overall < self.config.negative_threshold {
            // Failures are always worth remembering.
            return RetentionDecision {
                action: RetentionAction::StoreNegative,
                stored: false,
                reason: format!(
                    "documented failure ({:.1}/5), retained to avoid repeats",
                    feedback.overall
                ),
                similarity_to_existing: 0.0,
                most_similar_case_id: None,
                case_id: None,
            };
        }
        if feedback.overall < self.config.quality_threshold {
            return RetentionDecision {
                action: RetentionAction::Discard,
                stored: false,
                reason: format!(
                    "ambiguous feedback ({:.1}/5), neither failure nor precedent",
                    feedback.overall
                ),
                similarity_to_existing: 0.0,
                most_similar_case_id: None,
                case_id: None,
            };
        }

        // Good enough to keep: is it novel?
        let mut max_similarity = 0.0;
        let mut most_similar: Option<Case> = None;
        for case in store.all_cases() {
            let combined = combined_case_similarity(&self.similarity, request, menu, &case);
            if combined > max_similarity {
                max_similarity = combined;
                most_similar = Some(case);
            }
        }

        if max_similarity < self.config.novelty_threshold {
            return RetentionDecision {
                action: RetentionAction::StoreNew,
                stored: false,
                reason: "novel experience for the case store".into(),
                similarity_to_existing: max_similarity,
                most_similar_case_id: most_similar.map(|c| c.id),
                case_id: None,
            };
        }

        match most_similar {
            Some(existing) if feedback.overall > existing.outcome.score => RetentionDecision {
                action: RetentionAction::UpdateExisting,
                stored: false,
                reason: "improves an existing near-duplicate case".into(),
                similarity_to_existing: max_similarity,
                most_similar_case_id: Some(existing.id),
                case_id: None,
            },
            most_similar => RetentionDecision {
                action: RetentionAction::Discard,
                stored: false,
                reason: "redundant with an equal-or-better existing case".into(),
                similarity_to_existing: max_similarity,
                most_similar_case_id: most_similar.map(|c| c.id),
                case_id: None,
            },
        }
    }

    fn build_case(
        request: &Request,
        menu: &Menu,
        feedback: &Feedback,
        negative: bool,
    ) -> Case {
        let outcome = CaseOutcome {
            success: feedback.success && !negative,
            score: feedback.overall,
            comment: feedback.comment.clone(),
        };
        let mut case = Case::new(
            format!("case-{}", &uuid::Uuid::new_v4().to_string()[..13]),
            request.clone(),
            menu.clone(),
            outcome,
        )
        .with_source(CaseSource::Learned);
        case.negative = negative;
        case
    }

    fn maintenance_due(&mut self, store: &mut dyn ICaseStore, request: &Request) -> CbrResult<()> {
        self.inserts_since_maintenance += 1;
        if self.inserts_since_maintenance < self.config.maintenance_interval {
            return Ok(());
        }
        self.inserts_since_maintenance = 0;
        let removed = prune_event_bucket(
            store,
            &self.similarity,
            request.event_type,
            &self.config,
        )?;
        if removed > 0 {
            info!(removed, "maintenance pruned the event bucket");
        }
        Ok(())
    }
}

impl IRetainer for Retainer {
    fn retain(
        &mut self,
        store: &mut dyn ICaseStore,
        request: &Request,
        menu: &Menu,
        feedback: &Feedback,
    ) -> CbrResult<RetentionDecision> {
        if !feedback.is_on_scale() {
            return Err(RetentionError::InvalidFeedback {
                score: feedback.overall,
            }
            .into());
        }

        let mut decision = self.evaluate(store, request, menu, feedback);
        match decision.action {
            RetentionAction::StoreNew | RetentionAction::StoreNegative => {
                let negative = decision.action == RetentionAction::StoreNegative;
                let case = Self::build_case(request, menu, feedback, negative);
                decision.case_id = Some(case.id.clone());
                store.add_case(case)?;
                decision.stored = true;
                self.maintenance_due(store, request)?;
            }
            RetentionAction::UpdateExisting => {
                let id = decision
                    .most_similar_case_id
                    .clone()
                    .expect("update decision always names a case");
                let mut existing =
                    store
                        .get_case(&id)
                        .ok_or_else(|| RetentionError::StaleUpdateTarget {
                            id: id.clone(),
                        })?;
                // Blend scores weighted by how often the old case earned its
                // keep.
                let old_weight = existing.usage_count as f64;
                existing.outcome.score = (existing.outcome.score * old_weight
                    + feedback.overall)
                    / (old_weight + 1.0);
                existing.outcome.success = existing.outcome.success && feedback.success;
                if !feedback.comment.is_empty() {
                    existing.outcome.comment = feedback.comment.clone();
                }
                existing.menu = menu.clone();
                existing.record_use(Utc::now());
                existing
                    .notes
                    .push(format!("updated with better feedback ({:.1}/5)", feedback.overall));
                store.update_case(existing)?;
                decision.case_id = Some(id);
                decision.stored = true;
            }
            RetentionAction::Discard => {
                debug!(reason = %decision.reason, "experience discarded");
            }
        }
        Ok(decision)
    }
}
