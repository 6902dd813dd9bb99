use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type RollcallResult<T> = Result<T, RollcallError>;
