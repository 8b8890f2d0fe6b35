//! Logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{info, warn};

/// Request logging middleware
///
/// Server errors and client errors other than 404 are logged at `warn`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);
    let query = query.as_deref().unwrap_or("");

    match status {
        s if s.is_server_error() => warn!(
            method = %method,
            path = %path,
            query,
            status = s.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        ),
        s if s.is_client_error() && s != StatusCode::NOT_FOUND => warn!(
            method = %method,
            path = %path,
            query,
            status = s.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        ),
        s => info!(
            method = %method,
            path = %path,
            query,
            status = s.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        ),
    }

    response
}
