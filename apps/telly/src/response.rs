use axum::http::HeaderMap;

/// Request inspection for handlers that serve both full pages and
/// htmx fragments.
pub trait ContentNegotiation {
    /// True when the request was issued by htmx and expects a fragment.
    fn is_htmx(&self) -> bool;
}

impl ContentNegotiation for HeaderMap {
    fn is_htmx(&self) -> bool {
        self.get("hx-request")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}
