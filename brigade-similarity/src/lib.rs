//! # brigade-similarity
//!
//! The weighted similarity model: nine request/case criteria with per-call
//! weight masking, dish/menu structural similarity, and cultural fit with
//! optional embedding refinement.

mod cosine;
mod dish;
mod engine;

pub use cosine::{cosine_similarity, cosine_to_unit};
pub use dish::{dish_similarity, menu_similarity};
pub use engine::SimilarityEngine;

/// Combined request+menu similarity between a (request, menu) pair and an
/// existing case, used by retention and the adapter's negative guard.
/// Weighted 0.6 toward the request side.
pub fn combined_case_similarity(
    engine: &SimilarityEngine,
    request: &brigade_core::menu::Request,
    menu: &brigade_core::menu::Menu,
    case: &brigade_core::menu::Case,
) -> f64 {
    let request_side = engine.similarity(request, case);
    let menu_side = menu_similarity(menu, &case.menu);
    0.6 * request_side + 0.4 * menu_side
}
