/// Retention subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetentionError {
    #[error("feedback score {score} outside the 1-5 scale")]
    InvalidFeedback { score: f64 },

    #[error("case to update no longer exists: {id}")]
    StaleUpdateTarget { id: String },
}
