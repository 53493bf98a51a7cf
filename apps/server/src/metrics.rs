//! Metrics collection for the clinic server
//!
//! This module defines and manages Prometheus metrics for monitoring the server.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge_vec, HistogramVec,
    IntCounterVec, IntGaugeVec,
};

use crate::db::COLLECTIONS;

/// Non-collection routes served by the router
const SERVICE_ENDPOINTS: [&str; 3] = ["health", "metrics", "favicon.ico"];

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "clinic_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "clinic_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "clinic_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    /// HTTP request body size in bytes
    pub static ref HTTP_REQUEST_SIZE_BYTES: HistogramVec = register_histogram_vec!(
        "clinic_http_request_size_bytes",
        "HTTP request body size in bytes",
        &["method", "path"],
        vec![100.0, 1_000.0, 10_000.0, 100_000.0, 1_000_000.0]
    )
    .expect("Failed to register HTTP_REQUEST_SIZE_BYTES");

    // Clinic Operation Metrics

    /// Collection operations by collection, operation and outcome
    pub static ref CLINIC_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "clinic_operations_total",
        "Total number of collection operations",
        &["collection", "operation", "outcome"]
    )
    .expect("Failed to register CLINIC_OPERATIONS_TOTAL");

    /// Stored entities per collection
    pub static ref ENTITIES_TOTAL: IntGaugeVec = register_int_gauge_vec!(
        "clinic_entities_total",
        "Number of entities currently stored per collection",
        &["collection"]
    )
    .expect("Failed to register ENTITIES_TOTAL");
}

/// Update the stored-entity gauge after a mutation
pub fn record_collection_size(collection: &str, size: usize) {
    ENTITIES_TOTAL
        .with_label_values(&[collection])
        .set(i64::try_from(size).unwrap_or(i64::MAX));
}

/// Helper to sanitize path for metrics labels (remove IDs, limit cardinality)
pub fn sanitize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => "/".to_string(),
        [collection] if is_collection(collection) => format!("/{collection}"),
        [collection, _] if is_collection(collection) => format!("/{collection}/{{id}}"),
        [endpoint] if SERVICE_ENDPOINTS.contains(endpoint) => format!("/{endpoint}"),
        // Anything else collapses to keep label cardinality bounded
        _ => "/other".to_string(),
    }
}

/// Extract the REST collection from a request path
pub fn extract_collection(path: &str) -> Option<String> {
    let first = path.split('/').find(|s| !s.is_empty())?;
    is_collection(first).then(|| first.to_string())
}

/// Extract the collection operation from path and method
pub fn extract_operation(method: &str, path: &str) -> Option<String> {
    extract_collection(path)?;
    let has_id = path.split('/').filter(|s| !s.is_empty()).count() > 1;

    let operation = match (method, has_id) {
        ("GET", false) => "list",
        ("GET", true) => "read",
        ("POST", false) => "create",
        ("PUT", true) => "update",
        ("DELETE", true) => "delete",
        _ => return None,
    };
    Some(operation.to_string())
}

fn is_collection(segment: &str) -> bool {
    COLLECTIONS.contains(&segment)
}
