use anyhow::Context as _;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use serde_json::Value;

/// Assert exact status code
pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

/// Decode an error body and check its `status` and `code` members,
/// returning the message
pub fn assert_error_body(body: &Bytes, expected: StatusCode, code: &str) -> anyhow::Result<String> {
    let value: Value = serde_json::from_slice(body).context("decode error body")?;
    assert_eq!(value["status"], expected.as_u16(), "error status member");
    assert_eq!(value["code"], code, "error code member");
    value["message"]
        .as_str()
        .map(str::to_string)
        .context("error message is a string")
}

/// Assert the entity carries the given numeric id
pub fn assert_entity_id(entity: &Value, expected_id: u64) {
    assert_eq!(
        entity.get("id").and_then(Value::as_u64),
        Some(expected_id),
        "expected id {expected_id} in {entity}"
    );
}

/// Extract the numeric id of an entity
pub fn entity_id(entity: &Value) -> anyhow::Result<u64> {
    entity
        .get("id")
        .and_then(Value::as_u64)
        .context("entity has a numeric id")
}

/// Assert a header is present with exactly `expected`
pub fn assert_header(headers: &HeaderMap, name: &str, expected: &str) {
    let actual = headers.get(name).and_then(|v| v.to_str().ok());
    assert_eq!(actual, Some(expected), "header {name}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_id_reads_numbers_only() {
        assert_eq!(entity_id(&json!({ "id": 1000 })).unwrap(), 1000);
        assert!(entity_id(&json!({ "id": "1000" })).is_err());
    }

    #[test]
    fn error_body_members_are_checked() {
        let body = Bytes::from_static(
            br#"{"status":404,"code":"not-found","message":"Patient with ID 1 not found"}"#,
        );
        let message = assert_error_body(&body, StatusCode::NOT_FOUND, "not-found").unwrap();
        assert_eq!(message, "Patient with ID 1 not found");
    }
}
