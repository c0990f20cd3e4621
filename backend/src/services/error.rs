//! Error taxonomy for the school operations.

use crate::db::repository::RepositoryError;

pub const DUPLICATE_COORDINATE_MESSAGE: &str =
    "A school with the same latitude and longitude already exists.";
pub const MISSING_QUERY_MESSAGE: &str = "Latitude and Longitude are required.";
pub const INVALID_QUERY_MESSAGE: &str = "Latitude and Longitude must be valid numbers.";
pub const STORAGE_MESSAGE: &str = "Database error";

/// Failure of a create or list operation.
///
/// Every variant except `Storage` is caused by the caller's input and carries
/// a message that is safe to return verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed or missing create field; the message names the first failing field.
    #[error("{0}")]
    Validation(String),

    /// The (latitude, longitude) pair is already registered.
    #[error("{}", DUPLICATE_COORDINATE_MESSAGE)]
    DuplicateCoordinate,

    /// Query coordinate absent.
    #[error("{}", MISSING_QUERY_MESSAGE)]
    MissingQuery,

    /// Query coordinate present but not a finite number.
    #[error("{}", INVALID_QUERY_MESSAGE)]
    InvalidQuery,

    /// Persistence failure; the cause is for operators, not callers.
    #[error("storage failure: {0}")]
    Storage(#[source] RepositoryError),
}

impl ServiceError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }

    /// Message suitable for the response body.
    pub fn public_message(&self) -> String {
        match self {
            Self::Storage(_) => STORAGE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        if err.is_duplicate() {
            ServiceError::DuplicateCoordinate
        } else {
            ServiceError::Storage(err)
        }
    }
}
