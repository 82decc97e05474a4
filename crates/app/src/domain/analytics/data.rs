//! Analytics Data

use jiff::Timestamp;

/// Event tag recorded for every click on the Telegram call-to-action.
pub const TELEGRAM_CLICK: &str = "telegram_click";

/// New Telegram Click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClickEvent {
    pub occurred_at: Timestamp,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}
