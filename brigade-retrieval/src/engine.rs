//! The retrieval engine: pre-filter, hard filters, scoring, ranking.

use tracing::{debug, info};

use brigade_core::config::RetrievalConfig;
use brigade_core::errors::CbrResult;
use brigade_core::menu::{Case, Request};
use brigade_core::models::{NegativeWarning, RetrievalMatch};
use brigade_core::traits::{ICaseStore, IRetriever};
use brigade_similarity::SimilarityEngine;

use crate::diversify::mmr_select;

/// The retrieval engine. Borrows the session's similarity engine so
/// retrieval always scores with the current learned weights.
pub struct Retriever<'a> {
    similarity: &'a SimilarityEngine,
    config: RetrievalConfig,
}

impl<'a> Retriever<'a> {
    pub fn new(similarity: &'a SimilarityEngine, config: RetrievalConfig) -> Self {
        Self { similarity, config }
    }

    /// Index pre-filter: union of event, price-band (with margin), and
    /// season candidates. Falls back to the full store when empty.
    fn prefilter(&self, store: &dyn ICaseStore, request: &Request) -> Vec<Case> {
        let mut candidates: Vec<Case> = Vec::new();
        let mut push_unique = |case: Case, out: &mut Vec<Case>| {
            if !out.iter().any(|c| c.id == case.id) {
                out.push(case);
            }
        };

        for case in store.cases_by_event(request.event_type) {
            push_unique(case, &mut candidates);
        }

        if request.has_price_band() {
            let margin = request
                .band_width()
                .map(|w| w * self.config.prefilter_price_margin)
                .unwrap_or(10.0);
            let lo = request.price_min.map_or(0.0, |v| (v - margin).max(0.0));
            let hi = request.price_max.map_or(f64::MAX, |v| v + margin);
            for case in store.cases_by_price_range(lo, hi) {
                push_unique(case, &mut candidates);
            }
        }

        for case in store.cases_by_season(request.season) {
            push_unique(case, &mut candidates);
        }

        if candidates.is_empty() {
            debug!("pre-filter empty; falling back to full store");
            return store.all_cases();
        }
        candidates
    }

    /// Hard constraints: required diets (with a fallback when too few
    /// survive) and restricted ingredients (no fallback — allergens are
    /// never negotiable).
    fn filter_critical(&self, candidates: Vec<Case>, request: &Request) -> Vec<Case> {
        let mut filtered = candidates;

        if !request.required_diets.is_empty() {
            let compliant: Vec<Case> = filtered
                .iter()
                .filter(|c| c.menu.meets_diets(&request.required_diets))
                .cloned()
                .collect();
            if compliant.len() >= self.config.min_viable_pool {
                filtered = compliant;
            } else {
                // Let adaptation try to fix compliance instead of starving
                // the pipeline.
                debug!(
                    survivors = compliant.len(),
                    min = self.config.min_viable_pool,
                    "dietary filter skipped, pool too small"
                );
            }
        }

        if !request.restricted_ingredients.is_empty() {
            filtered.retain(|c| !c.menu.contains_restricted(&request.restricted_ingredients));
        }

        filtered
    }

    fn score(&self, candidates: Vec<Case>, request: &Request) -> Vec<RetrievalMatch> {
        let mut scored: Vec<RetrievalMatch> = candidates
            .into_iter()
            .map(|case| {
                let mut breakdown = self.similarity.breakdown(request, &case);
                let mut similarity = breakdown.total;

                if let Some(requested) = request.cultural_preference {
                    match case.menu.cultural_theme {
                        Some(theme) if theme == requested => {
                            // Exact-culture boost.
                            similarity = (similarity + 0.2).min(1.0);
                            breakdown.annotations.insert("cultural_match".into(), 1.0);
                        }
                        _ => {
                            // Diagnostic only: how adaptable the menu's
                            // ingredients are toward the requested culture.
                            let catalog = &self.similarity.knowledge().ingredients;
                            let fits: Vec<f64> = case
                                .menu
                                .courses()
                                .iter()
                                .filter(|(_, d)| !d.ingredients.is_empty())
                                .map(|(_, d)| catalog.cultural_fit(&d.ingredients, requested))
                                .collect();
                            if !fits.is_empty() {
                                let avg = fits.iter().sum::<f64>() / fits.len() as f64;
                                breakdown
                                    .annotations
                                    .insert("cultural_adaptability".into(), avg);
                            }
                        }
                    }
                }

                RetrievalMatch {
                    case,
                    similarity,
                    breakdown,
                    rank: 0,
                }
            })
            .collect();

        // Descending similarity; case id breaks ties deterministically.
        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.case.id.cmp(&b.case.id))
        });
        scored
    }

    fn retrieve_ranked(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
        k: usize,
    ) -> CbrResult<Vec<RetrievalMatch>> {
        let candidates = self.prefilter(store, request);
        let candidates: Vec<Case> = candidates.into_iter().filter(|c| !c.negative).collect();
        let candidates = self.filter_critical(candidates, request);
        let pool_size = candidates.len().min(self.config.max_candidates);
        let candidates: Vec<Case> = candidates.into_iter().take(pool_size).collect();

        debug!(candidates = pool_size, "scoring retrieval pool");
        let mut scored = self.score(candidates, request);
        scored.truncate(k);
        for (index, result) in scored.iter_mut().enumerate() {
            result.rank = index + 1;
        }

        info!(
            returned = scored.len(),
            top = scored.first().map(|m| m.similarity).unwrap_or(0.0),
            "retrieval complete"
        );
        Ok(scored)
    }
}

impl IRetriever for Retriever<'_> {
    fn retrieve(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
        k: usize,
    ) -> CbrResult<Vec<RetrievalMatch>> {
        self.retrieve_ranked(store, request, k)
    }

    fn retrieve_diverse(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
        k: usize,
    ) -> CbrResult<Vec<RetrievalMatch>> {
        // Over-fetch, then trade relevance against redundancy.
        let pool = self.retrieve_ranked(store, request, k * 3)?;
        Ok(mmr_select(pool, k, self.config.diversity_weight))
    }

    fn check_negative_cases(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
    ) -> Vec<NegativeWarning> {
        let mut warnings: Vec<NegativeWarning> = store
            .all_cases()
            .into_iter()
            .filter(|c| c.negative)
            .filter_map(|case| {
                let similarity = self.similarity.similarity(request, &case);
                (similarity >= self.config.negative_warning_threshold).then(|| NegativeWarning {
                    case_id: case.id.clone(),
                    similarity,
                    comment: case.outcome.comment.clone(),
                })
            })
            .collect();
        warnings.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        warnings
    }
}
