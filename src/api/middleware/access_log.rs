//! Request access logging middleware.

use axum::{extract::Request, http::header, middleware::Next, response::Response};
use std::time::Instant;

/// Logs one line per request: method, path, status, user agent and latency.
pub async fn access_log_mw(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let version = format!("{:?}", req.version());

    let ua = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    tracing::info!(
        r#""{method} {path} {version}" {status} "{ua}" {ms}ms"#,
        method = method,
        path = path,
        version = version,
        status = status,
        ua = ua,
        ms = ms,
    );

    response
}
