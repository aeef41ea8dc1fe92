//! Request logging middleware
//!
//! Logs every request with method, path, response status and latency.
//! Slow requests are flagged separately.

use std::time::Instant;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

const SLOW_REQUEST_MS: u128 = 1000;

/// axum middleware logging one line per handled request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    info!(
        method = %method,
        path = %path,
        status = status,
        duration_ms = duration_ms as u64,
        "Request completed"
    );

    if duration_ms > SLOW_REQUEST_MS {
        warn!(
            method = %method,
            path = %path,
            duration_ms = duration_ms as u64,
            "Slow request detected"
        );
    }

    response
}
