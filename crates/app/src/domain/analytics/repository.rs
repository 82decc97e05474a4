//! Analytics Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::decode_count,
    domain::analytics::records::{AnalyticsEventId, AnalyticsEventRecord},
};

const RECORD_EVENT_SQL: &str = include_str!("sql/record_event.sql");
const COUNT_EVENTS_SQL: &str = include_str!("sql/count_events.sql");
const COUNT_EVENTS_SINCE_SQL: &str = include_str!("sql/count_events_since.sql");
const COUNT_EVENTS_MATCHING_USER_AGENT_SQL: &str =
    include_str!("sql/count_events_matching_user_agent.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAnalyticsRepository;

impl PgAnalyticsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn record_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: &str,
        occurred_at: Timestamp,
        user_agent: Option<String>,
        referrer: Option<String>,
    ) -> Result<AnalyticsEventRecord, sqlx::Error> {
        query_as::<Postgres, AnalyticsEventRecord>(RECORD_EVENT_SQL)
            .bind(event)
            .bind(SqlxTimestamp::from(occurred_at))
            .bind(user_agent)
            .bind(referrer)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: &str,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_EVENTS_SQL)
            .bind(event)
            .fetch_one(&mut **tx)
            .await?;

        decode_count("count", count)
    }

    pub(crate) async fn count_events_since(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: &str,
        since: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_EVENTS_SINCE_SQL)
            .bind(event)
            .bind(SqlxTimestamp::from(since))
            .fetch_one(&mut **tx)
            .await?;

        decode_count("count", count)
    }

    /// Count events whose user-agent matches any of the `ILIKE` patterns.
    pub(crate) async fn count_events_matching_user_agent(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: &str,
        patterns: &[String],
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_EVENTS_MATCHING_USER_AGENT_SQL)
            .bind(event)
            .bind(patterns)
            .fetch_one(&mut **tx)
            .await?;

        decode_count("count", count)
    }
}

impl<'r> FromRow<'r, PgRow> for AnalyticsEventRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: AnalyticsEventId::from_i64(row.try_get("id")?),
            event: row.try_get("event")?,
            occurred_at: row.try_get::<SqlxTimestamp, _>("occurred_at")?.to_jiff(),
            user_agent: row.try_get("user_agent")?,
            referrer: row.try_get("referrer")?,
        })
    }
}
