/// Knowledge base errors. Only raised at load time; the hot path never fails
/// on missing knowledge, it degrades to neutral values instead.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("malformed knowledge table: {reason}")]
    MalformedTable { reason: String },

    #[error("unknown ingredient group: {group}")]
    UnknownGroup { group: String },
}
