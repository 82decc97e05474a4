//! Telegram Click Count Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Click Count Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClickCountResponse {
    /// Every Telegram click recorded so far
    pub total_clicks: u64,
}

/// Telegram Click Count Handler
#[endpoint(
    tags("analytics"),
    summary = "Count Telegram Clicks",
    responses(
        (status_code = StatusCode::OK, description = "Total clicks"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error getting analytics data"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClickCountResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let total_clicks = state
        .analytics
        .count_clicks()
        .await
        .or_500("Error getting analytics data")?;

    Ok(Json(ClickCountResponse { total_clicks }))
}
