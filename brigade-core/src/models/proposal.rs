use serde::{Deserialize, Serialize};

use super::adapted::{AdaptationNote, PriceBucket};
use super::retrieval_match::NegativeWarning;
use super::validation::ValidationReport;
use crate::menu::Menu;

/// A validated menu proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub menu: Menu,
    pub source_case_id: Option<String>,
    /// True post-adaptation similarity used for ranking.
    pub similarity: f64,
    pub notes: Vec<AdaptationNote>,
    pub validation: ValidationReport,
    pub price_bucket: PriceBucket,
    /// 1-based rank.
    pub rank: usize,
}

/// Result of one full retrieve-adapt-revise pass.
///
/// A pass that produces nothing returns `NoProposals` with explicit reasons —
/// never stale data, never an empty success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CbrOutcome {
    Proposals {
        proposals: Vec<Proposal>,
        /// Similar documented failures, surfaced but non-blocking.
        warnings: Vec<NegativeWarning>,
    },
    NoProposals {
        reasons: Vec<String>,
        warnings: Vec<NegativeWarning>,
    },
}

impl CbrOutcome {
    pub fn proposals(&self) -> &[Proposal] {
        match self {
            CbrOutcome::Proposals { proposals, .. } => proposals,
            CbrOutcome::NoProposals { .. } => &[],
        }
    }
}
