use super::store::ICaseStore;
use crate::errors::CbrResult;
use crate::menu::{Feedback, Menu, Request};
use crate::models::RetentionDecision;

/// The RETAIN phase: decide whether an experience enters the case store.
pub trait IRetainer {
    fn retain(
        &mut self,
        store: &mut dyn ICaseStore,
        request: &Request,
        menu: &Menu,
        feedback: &Feedback,
    ) -> CbrResult<RetentionDecision>;
}
