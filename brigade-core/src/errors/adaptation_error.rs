/// Adaptation subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum AdaptationError {
    #[error("catalog has no dishes of type {dish_type}")]
    EmptyCatalog { dish_type: String },

    #[error("no beverage available for preference alcoholic={alcoholic}")]
    NoBeverage { alcoholic: bool },

    #[error("generation exhausted after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}
