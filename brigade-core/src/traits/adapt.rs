use super::store::ICaseStore;
use crate::errors::CbrResult;
use crate::menu::Request;
use crate::models::{AdaptedCandidate, RetrievalMatch};

/// The ADAPT phase: transform retrieved candidates to fit the request.
pub trait IAdapter {
    /// Up to `n` adapted candidates, ranked by true post-adaptation
    /// similarity. Falls back to bounded from-scratch generation when too
    /// few candidates survive the pipeline.
    fn adapt(
        &mut self,
        store: &dyn ICaseStore,
        candidates: &[RetrievalMatch],
        request: &Request,
        n: usize,
    ) -> CbrResult<Vec<AdaptedCandidate>>;
}
