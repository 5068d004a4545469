use crate::errors::CbrResult;
use crate::menu::{Feedback, Menu, Request};
use crate::models::{LearningSnapshot, SimilarityWeights, WeightAdjustment};

/// Feedback-driven retuning of the similarity weight vector.
pub trait IWeightLearner {
    /// Apply one round of feedback. Returns the real (post-clamp) deltas.
    fn update(
        &mut self,
        feedback: &Feedback,
        request: &Request,
        menu: Option<&Menu>,
    ) -> CbrResult<Vec<WeightAdjustment>>;

    /// The current weight vector.
    fn weights(&self) -> &SimilarityWeights;

    /// Append-only audit history.
    fn history(&self) -> &[LearningSnapshot];
}
