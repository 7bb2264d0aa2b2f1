//! API base URL resolution and build-time configuration flags.

/// Base URL for API requests.
///
/// `API_BASE_URL` set at build time wins; otherwise the URL is derived
/// from the current window location, with port 3000 for the backend.
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build-time toggle: serve fixture data from `shared::mock` instead
/// of hitting the backend.
pub fn mock_enabled() -> bool {
    matches!(option_env!("USE_MOCK_DATA"), Some("1") | Some("true"))
}
