//! # brigade-core
//!
//! Foundation crate for the Brigade menu CBR engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod menu;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CbrConfig;
pub use errors::{CbrError, CbrResult};
pub use menu::{Beverage, Case, Dish, Feedback, Menu, Request};
pub use models::{Criterion, SimilarityWeights};
