//! User-agent device heuristics.
//!
//! A substring match, not a device classifier: any user-agent mentioning one
//! of the markers counts as mobile, everything else as desktop.

/// Markers matched case-insensitively against the user-agent.
pub const MOBILE_USER_AGENT_MARKERS: [&str; 3] = ["Mobile", "iPhone", "Android"];

/// Whether `user_agent` looks like a mobile browser.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();

    MOBILE_USER_AGENT_MARKERS
        .iter()
        .any(|marker| user_agent.contains(&marker.to_lowercase()))
}

/// `ILIKE` patterns equivalent to [`is_mobile_user_agent`].
pub(crate) fn mobile_user_agent_patterns() -> Vec<String> {
    MOBILE_USER_AGENT_MARKERS
        .iter()
        .map(|marker| format!("%{marker}%"))
        .collect()
}
