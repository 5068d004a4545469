//! Cross-crate model structs: weights, breakdowns, pipeline results,
//! validation reports, retention decisions, and learning snapshots.

mod adapted;
mod breakdown;
mod learning;
mod proposal;
mod retention;
mod retrieval_match;
mod validation;
mod weights;

pub use adapted::{AdaptationNote, AdaptationStage, AdaptedCandidate, PriceBucket};
pub use breakdown::SimilarityBreakdown;
pub use learning::{LearningSnapshot, WeightAdjustment};
pub use proposal::{CbrOutcome, Proposal};
pub use retention::{RetentionAction, RetentionDecision};
pub use retrieval_match::{NegativeWarning, RetrievalMatch};
pub use validation::{
    IssueCategory, IssueSeverity, ValidationIssue, ValidationReport, ValidationStatus,
};
pub use weights::{Criterion, SimilarityWeights};
