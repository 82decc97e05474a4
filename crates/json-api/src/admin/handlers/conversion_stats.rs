//! Conversion Stats Handler

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use thunder_app::domain::reports::models::ConversionStats;

use crate::extensions::*;

/// Conversion Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConversionStatsResponse {
    /// Every Telegram click recorded
    pub total_clicks: u64,

    /// Clicks in the last 24 hours
    pub recent_clicks_24h: u64,

    /// Clicks whose user agent looks like a phone
    pub mobile_clicks: u64,

    /// Share of mobile clicks, one decimal place
    pub mobile_percentage: f64,

    /// Campaign message focus
    pub message_focus: String,

    /// Campaign target audience
    pub target_audience: String,

    /// Campaign conversion funnel
    pub conversion_goal: String,
}

impl From<ConversionStats> for ConversionStatsResponse {
    fn from(stats: ConversionStats) -> Self {
        Self {
            total_clicks: stats.total_clicks,
            recent_clicks_24h: stats.recent_clicks_24h,
            mobile_clicks: stats.mobile_clicks,
            mobile_percentage: stats.mobile_percentage,
            message_focus: stats.message_focus.to_string(),
            target_audience: stats.target_audience.to_string(),
            conversion_goal: stats.conversion_goal.to_string(),
        }
    }
}

/// Conversion Stats Handler
#[endpoint(
    tags("admin"),
    summary = "Telegram Conversion Stats",
    responses(
        (status_code = StatusCode::OK, description = "Conversion statistics"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error getting conversion statistics"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<ConversionStatsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let stats = state
        .reports
        .conversion_stats(Timestamp::now())
        .await
        .or_500("Error getting conversion statistics")?;

    Ok(Json(stats.into()))
}
