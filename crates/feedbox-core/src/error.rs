use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("duplicate feedback id: {0}")]
    DuplicateId(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("invalid submission policy: {0}")]
    InvalidPolicy(String),
}
