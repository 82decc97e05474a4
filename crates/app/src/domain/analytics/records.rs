//! Analytics Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Analytics Event Id
pub type AnalyticsEventId = TypedId<AnalyticsEventRecord>;

/// Analytics Event Record
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEventRecord {
    pub id: AnalyticsEventId,
    pub event: String,
    pub occurred_at: Timestamp,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}
