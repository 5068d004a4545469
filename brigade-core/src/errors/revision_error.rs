/// Revision subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RevisionError {
    #[error("validation failed internally: {reason}")]
    CheckFailed { reason: String },
}
