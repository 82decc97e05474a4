//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    /// Logs the error and returns a 500 whose brief is `message`.
    ///
    /// Only `message` reaches the client; the error detail stays in the logs.
    fn or_500(self, message: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, message: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{message}: {error}");

            StatusError::internal_server_error().brief(message)
        })
    }
}
