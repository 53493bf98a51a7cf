//! Request ID middleware with OpenTelemetry trace context injection

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use opentelemetry::trace::TraceContextExt;
use std::time::Instant;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use uuid::Uuid;

/// Opens the root `http_request` span for each request.
///
/// The server always assigns its own `x-request-id`. A different id sent by
/// the client is echoed back as `x-correlation-id`, and the OpenTelemetry
/// trace id is exposed as `x-trace-id`.
#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        otel.kind = "server",
        http.response.status_code = tracing::field::Empty,
        clinic.collection = tracing::field::Empty,
        clinic.operation = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let span = Span::current();
    let start = Instant::now();

    let client_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let request_id = Uuid::new_v4().to_string();
    span.record("request_id", request_id.as_str());

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    if let Some(collection) = crate::metrics::extract_collection(&path) {
        span.record("clinic.collection", collection.as_str());
    }
    if let Some(operation) = crate::metrics::extract_operation(method.as_str(), &path) {
        span.record("clinic.operation", operation.as_str());
    }

    tracing::debug!(method = %method, path = %path, "Incoming request");

    let mut response = next.run(req).await;

    let status = response.status();
    span.record("http.response.status_code", status.as_u16());
    tracing::info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert("x-request-id", value);
    }

    let trace_id = span.context().span().span_context().trace_id().to_string();
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        headers.insert("x-trace-id", value);
    }

    if let Some(client_id) = client_id.filter(|id| *id != request_id) {
        if let Ok(value) = HeaderValue::from_str(&client_id) {
            headers.insert("x-correlation-id", value);
        }
    }

    response
}
