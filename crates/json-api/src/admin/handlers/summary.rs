//! Admin Summary Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use thunder_app::domain::reports::models::{AdminSummary, CatalogSummary, TestimonialSummary};

use crate::extensions::*;

/// Admin Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryResponse {
    pub products: ProductTotals,
    pub testimonials: TestimonialTotals,
    pub analytics: AnalyticsTotals,
}

/// Product counts by category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductTotals {
    pub total: usize,
    pub watches: usize,
    pub sneakers: usize,
    pub clothing: usize,
    pub featured: usize,
}

/// Approved testimonial totals
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TestimonialTotals {
    pub total: usize,
    pub average_rating: f64,
}

/// Click totals
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AnalyticsTotals {
    pub telegram_clicks: u64,
}

impl From<CatalogSummary> for ProductTotals {
    fn from(summary: CatalogSummary) -> Self {
        Self {
            total: summary.total,
            watches: summary.watches,
            sneakers: summary.sneakers,
            clothing: summary.clothing,
            featured: summary.featured,
        }
    }
}

impl From<TestimonialSummary> for TestimonialTotals {
    fn from(summary: TestimonialSummary) -> Self {
        Self {
            total: summary.total,
            average_rating: summary.average_rating,
        }
    }
}

impl From<AdminSummary> for SummaryResponse {
    fn from(summary: AdminSummary) -> Self {
        Self {
            products: summary.products.into(),
            testimonials: summary.testimonials.into(),
            analytics: AnalyticsTotals {
                telegram_clicks: summary.telegram_clicks,
            },
        }
    }
}

/// Admin Summary Handler
#[endpoint(
    tags("admin"),
    summary = "Admin Dashboard Summary",
    responses(
        (status_code = StatusCode::OK, description = "Dashboard summary"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error getting admin summary"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SummaryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let summary = state
        .reports
        .summary()
        .await
        .or_500("Error getting admin summary")?;

    Ok(Json(summary.into()))
}
