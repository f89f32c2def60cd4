//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or form error types, so the
//! conversions live here instead of next to [`TypeConstraintError`].

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for crate::forms::FieldErrors {
    fn from(val: TypeConstraintError) -> Self {
        use crate::forms::{BLANK_MESSAGE, FieldErrors, MIN_ZERO_MESSAGE};

        let message = match &val {
            TypeConstraintError::EmptyString(_) => BLANK_MESSAGE.to_string(),
            TypeConstraintError::NegativeNumber(_) => MIN_ZERO_MESSAGE.to_string(),
            TypeConstraintError::OutOfRange { min, max, .. } => {
                format!("Ensure this value is between {min} and {max}.")
            }
            TypeConstraintError::NonPositiveId(_) => val.to_string(),
        };
        FieldErrors::single(val.field(), message)
    }
}
