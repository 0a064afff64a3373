use thiserror::Error;

/// Errors surfaced by the store and service layers. The v1 API renders them
/// through `ApiResponse`, which owns the HTTP mapping.
#[derive(Error, Debug)]
pub enum MeepleError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for MeepleError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MeepleError::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MeepleError>;
