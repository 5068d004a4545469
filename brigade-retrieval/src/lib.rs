//! # brigade-retrieval
//!
//! The RETRIEVE phase: index pre-filter, negative-case exclusion, hard
//! dietary/allergen filtering with a bounded fallback, similarity scoring,
//! and optional marginal-relevance diversification.

mod diversify;
mod engine;

pub use engine::Retriever;
