/// Weight learning subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error("feedback score {score} outside the 1-5 scale")]
    InvalidFeedback { score: f64 },

    #[error("weight vector degenerate: sum {sum}")]
    DegenerateWeights { sum: f64 },
}
