//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    /// The injected application [`State`], or a 500 when the router was built without it.
    fn state_or_500(&self) -> Result<Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map(Arc::clone).map_err(|_ignored| {
            error!("application state missing from depot");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use crate::extensions::*;

    #[handler]
    async fn needs_state(depot: &mut Depot) -> Result<&'static str, StatusError> {
        depot.state_or_500()?;

        Ok("ok")
    }

    #[tokio::test]
    async fn missing_state_returns_500() {
        let res = TestClient::get("http://example.com/")
            .send(&Service::new(Router::new().get(needs_state)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
