//! The CBR session: propose menus, learn from feedback.

use std::sync::Arc;

use tracing::{debug, info};

use brigade_adaptation::Adapter;
use brigade_core::config::CbrConfig;
use brigade_core::errors::CbrResult;
use brigade_core::menu::{Feedback, Menu, Request};
use brigade_core::models::{
    CbrOutcome, Proposal, RetentionDecision, SimilarityWeights, WeightAdjustment,
};
use brigade_core::traits::{
    IAdapter, ICaseStore, ICulturalEmbedder, IRetainer, IRetriever, IWeightLearner,
};
use brigade_knowledge::KnowledgeBase;
use brigade_learning::WeightLearner;
use brigade_retention::Retainer;
use brigade_retrieval::Retriever;
use brigade_revision::Reviser;
use brigade_similarity::SimilarityEngine;

use crate::statistics::{
    retrieval_statistics, store_statistics, RetrievalStatistics, StoreStatistics,
};

/// Result of one learn() call: the weight deltas and the retention
/// decision.
#[derive(Debug, Clone)]
pub struct LearnOutcome {
    pub adjustments: Vec<WeightAdjustment>,
    pub decision: RetentionDecision,
}

/// One logical CBR session. Owns the store, the learned weight vector, and
/// every phase engine; external callers serialize access.
pub struct CbrSession {
    store: Box<dyn ICaseStore>,
    knowledge: Arc<KnowledgeBase>,
    similarity: SimilarityEngine,
    reviser: Reviser,
    learner: WeightLearner,
    retainer: Retainer,
    config: CbrConfig,
    /// Diversified retrieval for proposals.
    diversify: bool,
}

impl CbrSession {
    pub fn new(
        store: Box<dyn ICaseStore>,
        knowledge: Arc<KnowledgeBase>,
        config: CbrConfig,
    ) -> Self {
        Self::with_weights(store, knowledge, config, SimilarityWeights::default())
    }

    /// Start from an explicit (e.g. previously learned) weight vector.
    pub fn with_weights(
        store: Box<dyn ICaseStore>,
        knowledge: Arc<KnowledgeBase>,
        config: CbrConfig,
        weights: SimilarityWeights,
    ) -> Self {
        let similarity = SimilarityEngine::new(Arc::clone(&knowledge), weights.clone());
        let reviser = Reviser::new(Arc::clone(&knowledge), config.revision.clone());
        let learner = WeightLearner::new(weights.clone(), config.learning.clone());
        let retainer = Retainer::new(
            SimilarityEngine::new(Arc::clone(&knowledge), weights),
            config.retention.clone(),
        );
        Self {
            store,
            knowledge,
            similarity,
            reviser,
            learner,
            retainer,
            config,
            diversify: false,
        }
    }

    /// Attach an embedding backend for cultural similarity.
    pub fn with_embedder(mut self, embedder: Arc<dyn ICulturalEmbedder>) -> Self {
        self.similarity = SimilarityEngine::new(
            Arc::clone(&self.knowledge),
            self.learner.weights().clone(),
        )
        .with_embedder(embedder);
        self
    }

    /// Use diversified (MMR) retrieval for proposals.
    pub fn with_diversified_retrieval(mut self, enabled: bool) -> Self {
        self.diversify = enabled;
        self
    }

    pub fn weights(&self) -> &SimilarityWeights {
        self.learner.weights()
    }

    pub fn store(&self) -> &dyn ICaseStore {
        self.store.as_ref()
    }

    pub fn learner(&self) -> &WeightLearner {
        &self.learner
    }

    /// Run the full retrieve -> adapt -> revise cycle for one request.
    pub fn propose(&mut self, request: &Request) -> CbrResult<CbrOutcome> {
        let retriever = Retriever::new(&self.similarity, self.config.retrieval.clone());
        let k = self.config.retrieval.k;

        let matches = if self.diversify {
            retriever.retrieve_diverse(self.store.as_ref(), request, k)?
        } else {
            retriever.retrieve(self.store.as_ref(), request, k)?
        };
        let warnings = retriever.check_negative_cases(self.store.as_ref(), request);
        debug!(
            matches = matches.len(),
            warnings = warnings.len(),
            "retrieval phase done"
        );

        let mut adapter = Adapter::new(&self.similarity, self.config.adaptation.clone());
        let candidates = adapter.adapt(
            self.store.as_ref(),
            &matches,
            request,
            self.config.adaptation.max_proposals,
        )?;

        if candidates.is_empty() {
            let mut reasons = Vec::new();
            if matches.is_empty() {
                reasons.push("no stored case matched the request".to_string());
            }
            if !request.required_diets.is_empty() {
                let any_compliant = matches
                    .iter()
                    .any(|m| m.case.menu.meets_diets(&request.required_diets));
                if !any_compliant {
                    // The dietary fallback admitted non-compliant candidates
                    // and adaptation could not fix them: name the unmet
                    // constraint instead of failing silently.
                    reasons.push(format!(
                        "required diets could not be satisfied: {}",
                        request.required_diets.join(", ")
                    ));
                }
            }
            reasons.push(
                "no candidate survived adaptation and generation produced no valid menu"
                    .to_string(),
            );
            info!("no proposals for request");
            return Ok(CbrOutcome::NoProposals { reasons, warnings });
        }

        // Revise each candidate; feed the source case's feedback into the
        // score bonus.
        let mut proposals: Vec<Proposal> = Vec::new();
        let mut rejection_reasons: Vec<String> = Vec::new();
        for candidate in candidates {
            let source_feedback = candidate
                .source_case_id
                .as_deref()
                .and_then(|id| self.store.get_case(id))
                .map(|c| c.outcome.score);
            let validation =
                self.reviser
                    .validate_with_history(&candidate.menu, request, source_feedback)?;
            if validation.is_valid() {
                proposals.push(Proposal {
                    menu: candidate.menu,
                    source_case_id: candidate.source_case_id,
                    similarity: candidate.post_similarity,
                    notes: candidate.notes,
                    validation,
                    price_bucket: candidate.price_bucket,
                    rank: 0,
                });
            } else if let Some(reason) = validation.rejection_reason() {
                if !rejection_reasons.iter().any(|r| r == reason) {
                    rejection_reasons.push(reason.to_string());
                }
            }
        }

        if proposals.is_empty() {
            rejection_reasons.insert(0, "every candidate failed validation".to_string());
            return Ok(CbrOutcome::NoProposals {
                reasons: rejection_reasons,
                warnings,
            });
        }

        proposals.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (index, proposal) in proposals.iter_mut().enumerate() {
            proposal.rank = index + 1;
        }

        // Source cases earned a reuse.
        let used: Vec<String> = proposals
            .iter()
            .filter_map(|p| p.source_case_id.clone())
            .collect();
        for id in used {
            self.store.record_case_use(&id)?;
        }

        info!(proposals = proposals.len(), "cycle complete");
        Ok(CbrOutcome::Proposals {
            proposals,
            warnings,
        })
    }

    /// Feed one round of client feedback through the weight learner and the
    /// retainer.
    pub fn learn(
        &mut self,
        request: &Request,
        menu: &Menu,
        feedback: &Feedback,
    ) -> CbrResult<LearnOutcome> {
        let adjustments = self.learner.update(feedback, request, Some(menu))?;
        let weights = self.learner.weights().clone();
        self.similarity.set_weights(weights.clone());
        self.retainer.set_weights(weights);

        let decision = self
            .retainer
            .retain(self.store.as_mut(), request, menu, feedback)?;
        Ok(LearnOutcome {
            adjustments,
            decision,
        })
    }

    pub fn store_statistics(&self) -> StoreStatistics {
        store_statistics(self.store.as_ref())
    }

    pub fn retrieval_statistics(&self, request: &Request) -> RetrievalStatistics {
        retrieval_statistics(self.store.as_ref(), &self.similarity, request)
    }
}
