//! # brigade-store
//!
//! The in-memory case store: all cases plus the dish/beverage catalogs,
//! with secondary indices by event, price band, season, and style.
//!
//! Indices are rebuilt on removal and are NOT atomic against concurrent
//! readers — callers serialize access externally.

mod seed;
mod store;

pub use seed::{SeedCase, StoreSnapshot};
pub use store::{CaseStore, PriceBand};
