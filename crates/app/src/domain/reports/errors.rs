//! Reports service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
