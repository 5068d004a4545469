//! The nine-criterion similarity engine.
//!
//! Criteria whose request field is unspecified have their weight zeroed for
//! the call and the remainder renormalized on a derived copy of the vector.
//! A criterion that fails to compute degrades to a neutral 0.5 — a
//! similarity call never errors.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use brigade_core::menu::{
    Case, CaseOutcome, CulinaryStyle, CulturalTradition, EventType, Menu, Request, Season,
};
use brigade_core::models::{Criterion, SimilarityBreakdown, SimilarityWeights};
use brigade_core::traits::ICulturalEmbedder;
use brigade_knowledge::cultural::cultural_affinity;
use brigade_knowledge::events::{is_style_appropriate, preferred_styles};
use brigade_knowledge::KnowledgeBase;

use crate::cosine::{cosine_similarity, cosine_to_unit};

/// Event adjacency: related celebrations score partial credit.
const EVENT_AFFINITY: &[(EventType, EventType, f64)] = &[
    (EventType::Wedding, EventType::Communion, 0.6),
    (EventType::Wedding, EventType::Christening, 0.5),
    (EventType::Communion, EventType::Christening, 0.8),
    (EventType::Familiar, EventType::Christening, 0.7),
    (EventType::Familiar, EventType::Communion, 0.7),
    (EventType::Congress, EventType::Corporate, 0.9),
];

/// Neutral score substituted when a criterion fails to compute.
const NEUTRAL_SCORE: f64 = 0.5;

pub struct SimilarityEngine {
    knowledge: Arc<KnowledgeBase>,
    weights: SimilarityWeights,
    embedder: Option<Arc<dyn ICulturalEmbedder>>,
}

impl SimilarityEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>, weights: SimilarityWeights) -> Self {
        let mut weights = weights;
        weights.normalize();
        Self {
            knowledge,
            weights,
            embedder: None,
        }
    }

    /// Replace the hand-authored cultural affinity table with embedding
    /// cosine similarity.
    pub fn with_embedder(mut self, embedder: Arc<dyn ICulturalEmbedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Swap in a retuned weight vector (from the learner).
    pub fn set_weights(&mut self, weights: SimilarityWeights) {
        self.weights = weights;
        self.weights.normalize();
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Criteria left unspecified by this request, to be masked out.
    pub fn unspecified_criteria(request: &Request) -> Vec<Criterion> {
        let mut masked = Vec::new();
        if !request.has_price_band() {
            masked.push(Criterion::PriceRange);
        }
        if request.preferred_style.is_none() {
            masked.push(Criterion::Style);
        }
        if request.cultural_preference.is_none() {
            masked.push(Criterion::Cultural);
        }
        if request.required_diets.is_empty() {
            masked.push(Criterion::Dietary);
        }
        masked
    }

    /// Weighted similarity of a request against a stored case, in [0, 1].
    pub fn similarity(&self, request: &Request, case: &Case) -> f64 {
        self.breakdown(request, case).total
    }

    /// Full per-criterion breakdown for a request/case pair.
    pub fn breakdown(&self, request: &Request, case: &Case) -> SimilarityBreakdown {
        self.breakdown_masked(request, case, &Self::unspecified_criteria(request))
    }

    /// True similarity of a request against a bare menu, used to re-rank
    /// adapted and generated menus. The success-bonus criterion is masked
    /// as well: an adapted menu has no outcome yet.
    pub fn similarity_to_menu(&self, request: &Request, menu: &Menu) -> f64 {
        let synthetic = Case::new(
            "synthetic",
            request.clone(),
            menu.clone(),
            CaseOutcome {
                success: false,
                score: 1.0,
                comment: String::new(),
            },
        );
        let mut masked = Self::unspecified_criteria(request);
        masked.push(Criterion::SuccessBonus);
        self.breakdown_masked(request, &synthetic, &masked).total
    }

    fn breakdown_masked(
        &self,
        request: &Request,
        case: &Case,
        masked: &[Criterion],
    ) -> SimilarityBreakdown {
        let active = self.weights.masked(masked);

        let mut scores = BTreeMap::new();
        scores.insert(
            Criterion::EventType,
            self.event_similarity(request.event_type, case),
        );
        scores.insert(
            Criterion::Season,
            season_similarity(request.season, case.request.season),
        );
        scores.insert(
            Criterion::PriceRange,
            guarded("price_range", price_similarity(request, case.menu.total_price)),
        );
        scores.insert(
            Criterion::Style,
            style_similarity(
                request.preferred_style,
                request.event_type,
                case.menu.dominant_style,
            ),
        );
        scores.insert(
            Criterion::Cultural,
            self.cultural_similarity(request.cultural_preference, case.menu.cultural_theme),
        );
        scores.insert(
            Criterion::Dietary,
            dietary_similarity(&request.required_diets, &case.menu),
        );
        scores.insert(
            Criterion::Guests,
            guarded(
                "guests",
                guests_similarity(request.num_guests, case.request.num_guests, &case.menu),
            ),
        );
        scores.insert(
            Criterion::WinePreference,
            wine_similarity(request.wants_wine, case.request.wants_wine, &case.menu),
        );
        scores.insert(Criterion::SuccessBonus, success_bonus(&case.outcome));

        let total: f64 = Criterion::ALL
            .iter()
            .map(|c| active.weight(*c) * scores.get(c).copied().unwrap_or(NEUTRAL_SCORE))
            .sum();

        SimilarityBreakdown {
            scores,
            total: total.clamp(0.0, 1.0),
            annotations: BTreeMap::new(),
        }
    }

    fn event_similarity(&self, req_event: EventType, case: &Case) -> f64 {
        let case_event = case.request.event_type;
        if req_event == case_event {
            // Small penalty when the matched menu's style doesn't suit the
            // event.
            return match case.menu.dominant_style {
                Some(style) if !is_style_appropriate(style, req_event) => 0.95,
                _ => 1.0,
            };
        }
        EVENT_AFFINITY
            .iter()
            .find(|(a, b, _)| {
                (*a == req_event && *b == case_event) || (*a == case_event && *b == req_event)
            })
            .map(|(_, _, v)| *v)
            .unwrap_or(0.3)
    }

    fn cultural_similarity(
        &self,
        requested: Option<CulturalTradition>,
        theme: Option<CulturalTradition>,
    ) -> f64 {
        let Some(requested) = requested else {
            return 0.8;
        };
        let Some(theme) = theme else {
            return 0.6;
        };
        if requested == theme {
            return 1.0;
        }
        if let Some(embedder) = &self.embedder {
            if embedder.is_available() {
                match (embedder.embed(requested), embedder.embed(theme)) {
                    (Ok(a), Ok(b)) => return cosine_to_unit(cosine_similarity(&a, &b)),
                    (Err(e), _) | (_, Err(e)) => {
                        warn!(error = %e, "cultural embedder failed; using affinity table");
                    }
                }
            }
        }
        cultural_affinity(requested, theme)
    }
}

fn guarded(criterion: &str, result: Result<f64, String>) -> f64 {
    match result {
        Ok(v) => v.clamp(0.0, 1.0),
        Err(reason) => {
            warn!(criterion, %reason, "similarity criterion failed; using neutral score");
            NEUTRAL_SCORE
        }
    }
}

fn season_similarity(req: Season, case: Season) -> f64 {
    if req == case {
        return 1.0;
    }
    if req == Season::Any || case == Season::Any {
        return 0.9;
    }
    match req.cyclic_distance(case) {
        Some(1) => 0.7,
        Some(2) => 0.3,
        _ => 0.5,
    }
}

fn price_similarity(request: &Request, case_total: f64) -> Result<f64, String> {
    if let (Some(lo), Some(hi)) = (request.price_min, request.price_max) {
        if lo > hi {
            return Err(format!("inverted price band {lo}..{hi}"));
        }
    }
    if request.price_in_band(case_total) {
        return Ok(1.0);
    }
    let distance = match (request.price_min, request.price_max) {
        (Some(lo), _) if case_total < lo => lo - case_total,
        (_, Some(hi)) if case_total > hi => case_total - hi,
        _ => 0.0,
    };
    // Tolerance: 20% of the band, or a flat margin for one-sided and
    // degenerate bands.
    let tolerance = match request.band_width() {
        Some(width) if width * 0.2 > 0.0 => width * 0.2,
        _ => 10.0,
    };
    Ok((1.0 - distance / tolerance).max(0.0))
}

fn style_similarity(
    requested: Option<CulinaryStyle>,
    event: EventType,
    case_style: Option<CulinaryStyle>,
) -> f64 {
    match (requested, case_style) {
        (Some(req), Some(case)) if req == case => 1.0,
        (None, None) => 0.9,
        (None, Some(case)) => {
            if is_style_appropriate(case, event) {
                0.9
            } else {
                0.5
            }
        }
        (Some(req), Some(case)) => {
            let preferred = preferred_styles(event);
            match (preferred.contains(&req), preferred.contains(&case)) {
                (true, true) => 0.7,
                (_, true) => 0.5,
                _ => 0.3,
            }
        }
        (Some(_), None) => 0.5,
    }
}

/// Graded, never eliminating: the adapter may still fix an unmet diet.
/// Strictly increasing in the number of satisfied required diets, and 1.0
/// only when all are satisfied.
fn dietary_similarity(required: &[String], menu: &Menu) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    let satisfied_diets = menu.satisfied_diets();
    let satisfied = required
        .iter()
        .filter(|d| satisfied_diets.contains(*d))
        .count();
    if satisfied == required.len() {
        1.0
    } else {
        0.1 + 0.7 * satisfied as f64 / required.len() as f64
    }
}

fn guests_similarity(req_guests: u32, case_guests: u32, menu: &Menu) -> Result<f64, String> {
    if req_guests > menu.min_capacity() {
        return Ok(0.2);
    }
    if req_guests == 0 || case_guests == 0 {
        return Err("zero guest count".to_string());
    }
    Ok(req_guests.min(case_guests) as f64 / req_guests.max(case_guests) as f64)
}

fn wine_similarity(req_wine: bool, case_wine: bool, menu: &Menu) -> f64 {
    if req_wine != case_wine {
        return 0.5;
    }
    if req_wine {
        match (&menu.beverage.alcoholic, &menu.beverage.subtype) {
            (true, Some(_)) => 1.0,
            (true, None) => 0.8,
            (false, _) => 0.7,
        }
    } else if menu.beverage.alcoholic {
        0.7
    } else {
        1.0
    }
}

fn success_bonus(outcome: &CaseOutcome) -> f64 {
    if outcome.success {
        outcome.score / 5.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SimilarityEngine {
        SimilarityEngine::new(
            Arc::new(KnowledgeBase::builtin()),
            SimilarityWeights::default(),
        )
    }

    #[test]
    fn season_scores_match_the_cycle() {
        assert_eq!(season_similarity(Season::Summer, Season::Summer), 1.0);
        assert_eq!(season_similarity(Season::Summer, Season::Any), 0.9);
        assert_eq!(season_similarity(Season::Summer, Season::Spring), 0.7);
        assert_eq!(season_similarity(Season::Summer, Season::Winter), 0.3);
    }

    #[test]
    fn price_inside_band_is_perfect() {
        let mut req = Request::default();
        req.price_min = Some(80.0);
        req.price_max = Some(120.0);
        assert_eq!(price_similarity(&req, 100.0), Ok(1.0));
        // 8 over the band with tolerance 8: exactly zero credit.
        assert_eq!(price_similarity(&req, 128.0), Ok(0.0));
        // Halfway into the tolerance.
        let half = price_similarity(&req, 124.0).unwrap();
        assert!((half - 0.5).abs() < 1e-9);
    }

    #[test]
    fn inverted_band_degrades_to_neutral() {
        let mut req = Request::default();
        req.price_min = Some(120.0);
        req.price_max = Some(80.0);
        assert_eq!(guarded("price_range", price_similarity(&req, 100.0)), 0.5);
    }

    fn menu_with_diets(diets: &[&str]) -> Menu {
        use brigade_core::traits::ICaseStore;
        let store = test_fixtures::seeded_store();
        let mut menu = store.get_case("familiar-summer-002").unwrap().menu;
        for dish in [&mut menu.starter, &mut menu.main_course, &mut menu.dessert] {
            dish.diets = diets.iter().map(|d| d.to_string()).collect();
        }
        menu
    }

    #[test]
    fn dietary_is_strictly_increasing_and_tops_at_one() {
        let menu = menu_with_diets(&["vegan", "gluten-free"]);
        let one = dietary_similarity(&["vegan".into()], &menu);
        assert_eq!(one, 1.0);

        let menu = menu_with_diets(&["vegan"]);
        let required: Vec<String> = vec!["vegan".into(), "nut-free".into(), "halal".into()];
        let partial = dietary_similarity(&required, &menu);
        let none = dietary_similarity(
            &["nut-free".into(), "halal".into(), "kosher".into()],
            &menu,
        );
        assert!(partial > none);
        assert!(partial < 1.0);
        assert!(none > 0.0);
    }

    #[test]
    fn unspecified_fields_are_masked() {
        let req = Request::default();
        let masked = SimilarityEngine::unspecified_criteria(&req);
        assert!(masked.contains(&Criterion::PriceRange));
        assert!(masked.contains(&Criterion::Style));
        assert!(masked.contains(&Criterion::Cultural));
        assert!(masked.contains(&Criterion::Dietary));
        let active = SimilarityWeights::default().masked(&masked);
        assert!(active.is_normalized());
    }

    #[test]
    fn cultural_similarity_uses_the_affinity_table() {
        let e = engine();
        let exact = e.cultural_similarity(
            Some(CulturalTradition::Italian),
            Some(CulturalTradition::Italian),
        );
        let near = e.cultural_similarity(
            Some(CulturalTradition::Italian),
            Some(CulturalTradition::Spanish),
        );
        let far = e.cultural_similarity(
            Some(CulturalTradition::Italian),
            Some(CulturalTradition::Japanese),
        );
        assert_eq!(exact, 1.0);
        assert!(near > far);
    }
}
