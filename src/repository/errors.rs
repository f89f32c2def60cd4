use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be taken from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The row targeted by a write does not exist (anymore).
    #[error("record not found")]
    NotFound,
    /// A write collided with a unique index.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    /// A write referenced a row that does not exist.
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    /// The query itself failed.
    #[error("database error: {0}")]
    Database(DieselError),
    /// A stored row violates a domain invariant.
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::ForeignKeyViolation(info.message().to_string())
            }
            other => Self::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
