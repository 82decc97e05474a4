//! Route labels for request logging and metrics.

use salvo::http::StatusCode;

/// Label shared by every request that matched no route.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Collapse numeric path segments into `{id}` so per-record routes share one label.
///
/// Requests answered with 404 all share [`UNMATCHED_ROUTE`].
pub(super) fn route_label(path: &str, status: StatusCode) -> String {
    if status == StatusCode::NOT_FOUND {
        return UNMATCHED_ROUTE.to_owned();
    }

    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
