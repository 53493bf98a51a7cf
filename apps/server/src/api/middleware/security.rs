//! Security headers middleware

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Baseline hardening headers for a JSON API.
///
/// HSTS is only sent when the request arrived over HTTPS, directly or via a
/// proxy that sets `x-forwarded-proto`.
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let forwarded_https = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("https"));
    let is_https = forwarded_https || req.uri().scheme_str() == Some("https");

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in [
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "DENY"),
        ("referrer-policy", "no-referrer"),
        ("content-security-policy", "default-src 'none'"),
        ("cross-origin-resource-policy", "same-site"),
    ] {
        headers.insert(name, HeaderValue::from_static(value));
    }

    if is_https {
        headers.insert(
            "strict-transport-security",
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}
