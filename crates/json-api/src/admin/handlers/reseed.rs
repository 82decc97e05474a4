//! Reseed Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extensions::*;

/// Reseed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReseedResponse {
    /// Always true; failures return a 500
    pub success: bool,

    /// Outcome description
    pub message: String,
}

/// Reseed Handler
///
/// Deletes every product and testimonial and restores the seed set.
/// Analytics events are kept. Unauthenticated.
#[endpoint(
    tags("admin"),
    summary = "Reseed Catalog",
    responses(
        (status_code = StatusCode::OK, description = "Catalog reseeded"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error reseeding database"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ReseedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let report = state
        .seeding
        .reseed()
        .await
        .or_500("Error reseeding database")?;

    info!(
        products = report.products,
        testimonials = report.testimonials,
        "catalog reseeded"
    );

    Ok(Json(ReseedResponse {
        success: true,
        message: "Database reseeded with seed data".to_string(),
    }))
}
