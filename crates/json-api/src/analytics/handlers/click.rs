//! Track Telegram Click Handler

use jiff::Timestamp;
use salvo::{
    http::header::{REFERER, USER_AGENT},
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use thunder_app::domain::analytics::data::NewClickEvent;

use crate::{
    extensions::*,
    observability::{ClickOutcome, observe_telegram_click},
};

/// Track Telegram Click Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct TelegramClickRequest {
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
}

/// Click Tracking Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClickTrackedResponse {
    /// Whether the click was stored
    pub success: bool,

    /// Outcome description
    pub message: String,
}

/// Body value when present and non-blank, otherwise the request header.
fn body_or_header(body: Option<String>, header: Option<String>) -> Option<String> {
    body.filter(|value| !value.trim().is_empty())
        .or_else(|| header.filter(|value| !value.trim().is_empty()))
}

/// Track Telegram Click Handler
///
/// Records one click on the Telegram call-to-action. Storage failures are
/// reported in the body with `success: false`, never as an error status.
#[endpoint(
    tags("analytics"),
    summary = "Track Telegram Click",
    responses(
        (status_code = StatusCode::OK, description = "Click tracking outcome"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<TelegramClickRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ClickTrackedResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let body = json.into_inner();

    let click = NewClickEvent {
        occurred_at: Timestamp::now(),
        user_agent: body_or_header(body.user_agent, req.header::<String>(USER_AGENT)),
        referrer: body_or_header(body.referrer, req.header::<String>(REFERER)),
    };

    let response = match state.analytics.record_click(click).await {
        Ok(_) => {
            observe_telegram_click(ClickOutcome::Recorded);

            ClickTrackedResponse {
                success: true,
                message: "Telegram click tracked successfully".to_string(),
            }
        }
        Err(source) => {
            error!("Error tracking telegram click: {source}");
            observe_telegram_click(ClickOutcome::Failed);

            ClickTrackedResponse {
                success: false,
                message: "Error tracking telegram click".to_string(),
            }
        }
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use thunder_app::domain::analytics::{
        AnalyticsServiceError, MockAnalyticsService,
        data::TELEGRAM_CLICK,
        records::{AnalyticsEventId, AnalyticsEventRecord},
    };

    use crate::test_helpers::analytics_service;

    use super::*;

    fn make_service(analytics: MockAnalyticsService) -> Service {
        analytics_service(
            analytics,
            Router::with_path("api/telegram-click").post(handler),
        )
    }

    fn recorded(click: NewClickEvent) -> AnalyticsEventRecord {
        AnalyticsEventRecord {
            id: AnalyticsEventId::from_i64(1),
            event: TELEGRAM_CLICK.to_string(),
            occurred_at: click.occurred_at,
            user_agent: click.user_agent,
            referrer: click.referrer,
        }
    }

    #[test]
    fn body_value_wins_over_header() {
        assert_eq!(
            body_or_header(Some("body".to_string()), Some("header".to_string())),
            Some("body".to_string())
        );
    }

    #[test]
    fn blank_body_value_falls_back_to_header() {
        assert_eq!(
            body_or_header(Some("  ".to_string()), Some("header".to_string())),
            Some("header".to_string())
        );
        assert_eq!(body_or_header(None, Some(String::new())), None);
    }

    #[tokio::test]
    async fn test_click_uses_body_fields() -> TestResult {
        let mut analytics = MockAnalyticsService::new();
        let before = Timestamp::now();

        analytics
            .expect_record_click()
            .once()
            .withf(move |click| {
                click.user_agent.as_deref() == Some("Mozilla/5.0 (iPhone)")
                    && click.referrer.as_deref() == Some("https://www.tiktok.com/")
                    && click.occurred_at >= before
            })
            .return_once(|click| Ok(recorded(click)));

        analytics.expect_count_clicks().never();

        let response: ClickTrackedResponse =
            TestClient::post("http://example.com/api/telegram-click")
                .add_header("user-agent", "curl/8.0", true)
                .json(&json!({
                    "user_agent": "Mozilla/5.0 (iPhone)",
                    "referrer": "https://www.tiktok.com/",
                }))
                .send(&make_service(analytics))
                .await
                .take_json()
                .await?;

        assert!(response.success);
        assert_eq!(response.message, "Telegram click tracked successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_click_falls_back_to_headers() -> TestResult {
        let mut analytics = MockAnalyticsService::new();

        analytics
            .expect_record_click()
            .once()
            .withf(|click| {
                click.user_agent.as_deref() == Some("Mozilla/5.0 (Linux; Android 14)")
                    && click.referrer.as_deref() == Some("https://vm.tiktok.com/abc")
            })
            .return_once(|click| Ok(recorded(click)));

        analytics.expect_count_clicks().never();

        let response: ClickTrackedResponse =
            TestClient::post("http://example.com/api/telegram-click")
                .add_header("user-agent", "Mozilla/5.0 (Linux; Android 14)", true)
                .add_header("referer", "https://vm.tiktok.com/abc", true)
                .json(&json!({}))
                .send(&make_service(analytics))
                .await
                .take_json()
                .await?;

        assert!(response.success);

        Ok(())
    }

    #[tokio::test]
    async fn test_click_storage_failure_returns_200_with_success_false() -> TestResult {
        let mut analytics = MockAnalyticsService::new();

        analytics
            .expect_record_click()
            .once()
            .return_once(|_| Err(AnalyticsServiceError::MissingRequiredData));

        analytics.expect_count_clicks().never();

        let mut res = TestClient::post("http://example.com/api/telegram-click")
            .json(&json!({}))
            .send(&make_service(analytics))
            .await;

        let response: ClickTrackedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!response.success);
        assert_eq!(response.message, "Error tracking telegram click");

        Ok(())
    }
}
