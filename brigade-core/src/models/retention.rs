use serde::{Deserialize, Serialize};

/// What the retainer decided to do with a new experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionAction {
    /// Stored as a fresh positive case.
    StoreNew,
    /// Stored as a documented failure.
    StoreNegative,
    /// Blended into the most-similar existing case.
    UpdateExisting,
    /// Not worth keeping.
    Discard,
}

/// The retainer's decision, with enough context to explain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionDecision {
    pub action: RetentionAction,
    /// Whether anything was written to the store.
    pub stored: bool,
    pub reason: String,
    /// Max combined similarity against existing cases at decision time.
    pub similarity_to_existing: f64,
    pub most_similar_case_id: Option<String>,
    /// Id of the case written or updated, when one was.
    pub case_id: Option<String>,
}
