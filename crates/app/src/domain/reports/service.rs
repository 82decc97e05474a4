//! Reports service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        analytics::{
            data::TELEGRAM_CLICK, devices::mobile_user_agent_patterns,
            repository::PgAnalyticsRepository,
        },
        products::repository::PgProductsRepository,
        reports::{
            errors::ReportsServiceError,
            models::{AdminSummary, CatalogSummary, ConversionStats, TestimonialSummary},
        },
        testimonials::repository::PgTestimonialsRepository,
    },
};

/// Window counted as "recent" in conversion statistics.
pub const RECENT_CLICKS_WINDOW: SignedDuration = SignedDuration::from_hours(24);

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    products: PgProductsRepository,
    testimonials: PgTestimonialsRepository,
    analytics: PgAnalyticsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            testimonials: PgTestimonialsRepository::new(),
            analytics: PgAnalyticsRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn conversion_stats(
        &self,
        now: Timestamp,
    ) -> Result<ConversionStats, ReportsServiceError> {
        let since = now
            .checked_sub(RECENT_CLICKS_WINDOW)
            .unwrap_or(Timestamp::MIN);

        let mut tx = self.db.begin().await?;

        let total_clicks = self.analytics.count_events(&mut tx, TELEGRAM_CLICK).await?;

        let recent_clicks = self
            .analytics
            .count_events_since(&mut tx, TELEGRAM_CLICK, since)
            .await?;

        let mobile_clicks = self
            .analytics
            .count_events_matching_user_agent(
                &mut tx,
                TELEGRAM_CLICK,
                &mobile_user_agent_patterns(),
            )
            .await?;

        tx.commit().await?;

        Ok(ConversionStats::new(
            total_clicks,
            recent_clicks,
            mobile_clicks,
        ))
    }

    async fn summary(&self) -> Result<AdminSummary, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.products.list_products(&mut tx).await?;
        let testimonials = self.testimonials.list_testimonials(&mut tx).await?;
        let telegram_clicks = self.analytics.count_events(&mut tx, TELEGRAM_CLICK).await?;

        tx.commit().await?;

        Ok(AdminSummary {
            products: CatalogSummary::from_products(&products),
            testimonials: TestimonialSummary::from_testimonials(&testimonials),
            telegram_clicks,
        })
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Click totals, clicks within [`RECENT_CLICKS_WINDOW`] of `now`, and the mobile share.
    async fn conversion_stats(
        &self,
        now: Timestamp,
    ) -> Result<ConversionStats, ReportsServiceError>;

    /// Catalog, testimonial and click totals for the admin dashboard.
    async fn summary(&self) -> Result<AdminSummary, ReportsServiceError>;
}
