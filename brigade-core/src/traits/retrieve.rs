use super::store::ICaseStore;
use crate::errors::CbrResult;
use crate::menu::Request;
use crate::models::{NegativeWarning, RetrievalMatch};

/// The RETRIEVE phase: rank stored cases against a request.
pub trait IRetriever {
    /// Top-k cases by similarity, with per-criterion breakdowns.
    fn retrieve(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
        k: usize,
    ) -> CbrResult<Vec<RetrievalMatch>>;

    /// Top-k with a marginal-relevance diversity trade-off.
    fn retrieve_diverse(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
        k: usize,
    ) -> CbrResult<Vec<RetrievalMatch>>;

    /// Negative cases similar enough to the request to flag. Non-blocking.
    fn check_negative_cases(
        &self,
        store: &dyn ICaseStore,
        request: &Request,
    ) -> Vec<NegativeWarning>;
}
