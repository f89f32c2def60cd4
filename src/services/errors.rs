use thiserror::Error;

use crate::forms::{FieldErrors, FormError};

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The request body is not valid JSON.
    #[error("malformed body: {0}")]
    Malformed(String),
    /// Submitted data failed validation.
    #[error(transparent)]
    Form(#[from] FieldErrors),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Malformed(detail) => ServiceError::Malformed(detail),
            FormError::Fields(errors) => ServiceError::Form(errors),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
