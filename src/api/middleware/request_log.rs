//! Request timing log

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Log method and path on entry, then status and elapsed milliseconds on exit.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    info!(%method, %path, "Request started");

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = %format!("{:.2}", elapsed_ms),
        "Request finished"
    );
    response
}
