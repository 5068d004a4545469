//! # brigade-adaptation
//!
//! The ADAPT phase: an ordered, short-circuiting pipeline that transforms a
//! retrieved candidate menu to fit the request, plus bounded from-scratch
//! generation when too few candidates survive.
//!
//! Stage order matters: dietary fix-up runs before the allergen re-check so
//! substitutions are re-screened; price runs before seasonal/style so later
//! swaps stay inside the rebalanced budget envelope.

mod engine;
mod generate;
mod stages;

pub use engine::Adapter;
