//! Metrics middleware - tracks HTTP request metrics

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics;

/// Record request counts, latency, in-flight requests and per-collection
/// operation outcomes
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    // Sanitize path for metrics (remove IDs to reduce cardinality)
    let sanitized_path = metrics::sanitize_path(&path);
    let labels = [method.as_str(), sanitized_path.as_str()];

    metrics::HTTP_REQUESTS_IN_FLIGHT
        .with_label_values(&labels)
        .inc();

    if let Some(content_length) = req
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<f64>().ok())
    {
        metrics::HTTP_REQUEST_SIZE_BYTES
            .with_label_values(&labels)
            .observe(content_length);
    }

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status();
    let status_label = status.as_u16().to_string();

    metrics::HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &sanitized_path, &status_label])
        .inc();
    metrics::HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&labels)
        .observe(duration);

    if let (Some(collection), Some(operation)) = (
        metrics::extract_collection(&path),
        metrics::extract_operation(&method, &path),
    ) {
        let outcome = if status.is_success() {
            "success"
        } else if status.is_client_error() {
            "client_error"
        } else {
            "server_error"
        };
        metrics::CLINIC_OPERATIONS_TOTAL
            .with_label_values(&[&collection, &operation, outcome])
            .inc();
    }

    metrics::HTTP_REQUESTS_IN_FLIGHT
        .with_label_values(&labels)
        .dec();

    response
}
