//! Error types for every Brigade subsystem.
//!
//! Each subsystem has its own thiserror enum; `CbrError` aggregates them so
//! callers can hold a single error type across the whole cycle.

mod adaptation_error;
mod knowledge_error;
mod learning_error;
mod retention_error;
mod retrieval_error;
mod revision_error;
mod store_error;

pub use adaptation_error::AdaptationError;
pub use knowledge_error::KnowledgeError;
pub use learning_error::LearningError;
pub use retention_error::RetentionError;
pub use retrieval_error::RetrievalError;
pub use revision_error::RevisionError;
pub use store_error::StoreError;

/// Result alias used across the workspace.
pub type CbrResult<T> = Result<T, CbrError>;

/// Top-level error for the Brigade engine.
#[derive(Debug, thiserror::Error)]
pub enum CbrError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Adaptation(#[from] AdaptationError),

    #[error(transparent)]
    Revision(#[from] RevisionError),

    #[error(transparent)]
    Retention(#[from] RetentionError),

    #[error(transparent)]
    Learning(#[from] LearningError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration loading/validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
