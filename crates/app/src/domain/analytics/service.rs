//! Analytics service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::analytics::{
        data::{NewClickEvent, TELEGRAM_CLICK},
        devices::is_mobile_user_agent,
        errors::AnalyticsServiceError,
        records::AnalyticsEventRecord,
        repository::PgAnalyticsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAnalyticsService {
    db: Db,
    repository: PgAnalyticsRepository,
}

impl PgAnalyticsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAnalyticsRepository::new(),
        }
    }
}

#[async_trait]
impl AnalyticsService for PgAnalyticsService {
    async fn record_click(
        &self,
        click: NewClickEvent,
    ) -> Result<AnalyticsEventRecord, AnalyticsServiceError> {
        let mut tx = self.db.begin().await?;

        let mobile = click.user_agent.as_deref().is_some_and(is_mobile_user_agent);

        let recorded = self
            .repository
            .record_event(
                &mut tx,
                TELEGRAM_CLICK,
                click.occurred_at,
                click.user_agent,
                click.referrer,
            )
            .await?;

        tx.commit().await?;

        debug!(event_id = %recorded.id, mobile, "telegram click recorded");

        Ok(recorded)
    }

    async fn count_clicks(&self) -> Result<u64, AnalyticsServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_events(&mut tx, TELEGRAM_CLICK).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Appends one Telegram click event.
    async fn record_click(
        &self,
        click: NewClickEvent,
    ) -> Result<AnalyticsEventRecord, AnalyticsServiceError>;

    /// Counts every recorded Telegram click.
    async fn count_clicks(&self) -> Result<u64, AnalyticsServiceError>;
}
