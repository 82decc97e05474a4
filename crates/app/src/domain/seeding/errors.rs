//! Seeding service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedingServiceError {
    #[error("seed record already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SeedingServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}
