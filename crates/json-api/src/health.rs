//! API Root Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// API status response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApiStatusResponse {
    /// Human-readable status line
    pub message: String,

    /// Service status
    pub status: String,
}

/// API root handler
///
/// Reports that the API is up. Does not touch the database.
#[endpoint(tags("health"), summary = "API status")]
pub(crate) async fn handler() -> Json<ApiStatusResponse> {
    Json(ApiStatusResponse {
        message: "Thunder Services API is running".to_string(),
        status: "healthy".to_string(),
    })
}
