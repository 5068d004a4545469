//! The adaptation engine: runs the stage pipeline per candidate, fills the
//! shortfall with generated menus, and re-ranks everything by true
//! post-adaptation similarity.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use brigade_core::config::AdaptationConfig;
use brigade_core::errors::CbrResult;
use brigade_core::menu::{Case, Request};
use brigade_core::models::{
    AdaptationNote, AdaptationStage, AdaptedCandidate, PriceBucket, RetrievalMatch,
};
use brigade_core::traits::{IAdapter, ICaseStore};
use brigade_similarity::{combined_case_similarity, SimilarityEngine};

use crate::generate::generate_menu;
use crate::stages::{self, StageOutcome};

/// The adaptation engine. Borrows the session's similarity engine; owns the
/// RNG used by from-scratch generation.
pub struct Adapter<'a> {
    similarity: &'a SimilarityEngine,
    config: AdaptationConfig,
    rng: StdRng,
}

impl<'a> Adapter<'a> {
    pub fn new(similarity: &'a SimilarityEngine, config: AdaptationConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            similarity,
            config,
            rng,
        }
    }

    /// Run the ordered pipeline on one retrieved candidate. `None` means the
    /// candidate was rejected by a hard constraint.
    fn adapt_case(
        &self,
        store: &dyn ICaseStore,
        candidate: &RetrievalMatch,
        request: &Request,
        negatives: &[Case],
    ) -> Option<AdaptedCandidate> {
        let case = &candidate.case;

        // Stage 1: never adapt toward a documented failure.
        let near_negative = negatives.iter().any(|negative| {
            combined_case_similarity(self.similarity, request, &case.menu, negative)
                > self.config.negative_similarity
        });
        if near_negative {
            debug!(case = %case.id, "candidate rejected: too close to a negative case");
            return None;
        }

        let mut notes: Vec<AdaptationNote> = Vec::new();
        let mut menu = case.menu.clone();
        menu.id = format!("adapted-{}-{}", case.id, &uuid::Uuid::new_v4().to_string()[..8]);

        // Stage 2: dietary fix-up.
        let catalog = &self.similarity.knowledge().ingredients;
        menu = match stages::dietary::apply(menu, request, catalog, &mut notes) {
            StageOutcome::Continue(menu) => menu,
            StageOutcome::Reject(reason) => {
                debug!(case = %case.id, %reason, "candidate rejected by dietary fix-up");
                return None;
            }
        };

        // Stage 3: defensive allergen re-check.
        if let Some(reason) = stages::dietary::recheck_allergens(&menu, request) {
            debug!(case = %case.id, %reason, "candidate rejected by allergen re-check");
            return None;
        }

        // Stages 4-8: soft corrections. None of these reject.
        menu = stages::price::apply(menu, request, store, &self.config, &mut notes);
        menu = stages::seasonal::apply(menu, request, store, &mut notes);
        menu = stages::beverage::apply(menu, request, store, &mut notes);
        menu = stages::cultural::apply(menu, request, store, catalog, &self.config, &mut notes);
        menu = stages::style::apply(menu, request, store, &mut notes);

        menu.recompute_totals();

        // The pre-adaptation score is stale once courses change: rank by
        // the true similarity of the transformed menu.
        let post_similarity = self.similarity.similarity_to_menu(request, &menu);

        Some(AdaptedCandidate {
            price_bucket: PriceBucket::classify(
                menu.total_price,
                request.price_min,
                request.price_max,
            ),
            menu,
            source_case_id: Some(case.id.clone()),
            notes,
            pre_similarity: candidate.similarity,
            post_similarity,
        })
    }

    fn generate_candidate(
        &mut self,
        store: &dyn ICaseStore,
        request: &Request,
        negatives: &[Case],
    ) -> Option<AdaptedCandidate> {
        let menu = generate_menu(
            store,
            request,
            self.similarity,
            negatives,
            &self.config,
            &mut self.rng,
        )?;
        let post_similarity = self.similarity.similarity_to_menu(request, &menu);
        Some(AdaptedCandidate {
            price_bucket: PriceBucket::classify(
                menu.total_price,
                request.price_min,
                request.price_max,
            ),
            menu,
            source_case_id: None,
            notes: vec![AdaptationNote::new(
                AdaptationStage::Generated,
                "menu generated from the catalog under request constraints",
            )],
            pre_similarity: 0.0,
            post_similarity,
        })
    }
}

impl IAdapter for Adapter<'_> {
    fn adapt(
        &mut self,
        store: &dyn ICaseStore,
        candidates: &[RetrievalMatch],
        request: &Request,
        n: usize,
    ) -> CbrResult<Vec<AdaptedCandidate>> {
        let negatives: Vec<Case> = store
            .all_cases()
            .into_iter()
            .filter(|c| c.negative)
            .collect();

        let mut results: Vec<AdaptedCandidate> = Vec::new();
        for candidate in candidates {
            if results.len() >= n {
                break;
            }
            if let Some(adapted) = self.adapt_case(store, candidate, request, &negatives) {
                results.push(adapted);
            }
        }

        // Fill the shortfall from scratch; generation shares the negative
        // screen and every hard constraint.
        while results.len() < n {
            match self.generate_candidate(store, request, &negatives) {
                Some(generated) => results.push(generated),
                None => break,
            }
        }

        results.sort_by(|a, b| {
            b.post_similarity
                .partial_cmp(&a.post_similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(n);

        info!(
            adapted = results.iter().filter(|r| r.source_case_id.is_some()).count(),
            generated = results.iter().filter(|r| r.source_case_id.is_none()).count(),
            "adaptation complete"
        );
        Ok(results)
    }
}
