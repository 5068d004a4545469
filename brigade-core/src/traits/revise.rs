use crate::errors::CbrResult;
use crate::menu::{Menu, Request};
use crate::models::ValidationReport;

/// The REVISE phase: validate a menu against a request.
pub trait IReviser {
    fn validate(&self, menu: &Menu, request: &Request) -> CbrResult<ValidationReport>;
}
