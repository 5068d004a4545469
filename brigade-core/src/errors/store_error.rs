/// Case store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("case not found: {id}")]
    CaseNotFound { id: String },

    #[error("duplicate case id: {id}")]
    DuplicateCase { id: String },

    #[error("unknown dish id referenced by seed case {case_id}: {dish_id}")]
    UnknownDish { case_id: String, dish_id: String },

    #[error("unknown beverage id referenced by seed case {case_id}: {beverage_id}")]
    UnknownBeverage { case_id: String, beverage_id: String },

    #[error("malformed seed data: {reason}")]
    MalformedSeed { reason: String },
}
