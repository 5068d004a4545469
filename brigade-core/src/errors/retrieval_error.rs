/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("no cases available in the store")]
    EmptyStore,

    #[error("scoring failed: {reason}")]
    ScoringFailed { reason: String },
}
