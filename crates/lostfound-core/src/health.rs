use axum::http::StatusCode;

/// Liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
