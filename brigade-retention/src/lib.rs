//! # brigade-retention
//!
//! The RETAIN phase: decide whether a served (request, menu, feedback)
//! experience enters the case store — as a new case, an update to the
//! most-similar existing one, a documented failure, or not at all — and
//! periodically prune redundant cases per event bucket.

mod engine;
mod maintenance;

pub use engine::Retainer;
pub use maintenance::case_utility;
