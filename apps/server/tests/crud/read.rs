//! READ operation tests (GET /{collection}/{id})

use crate::support::{
    assert_entity_id, assert_error_body, assert_status, collections, to_json_body,
    valid_doctor, valid_medical_record, valid_patient, with_test_app,
};
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn read_existing_entity() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let created = app.create(collections::PATIENTS, &valid_patient()).await?;

            let (status, _headers, body) = app.request(Method::GET, "/patients/1000", None).await?;
            assert_status(status, StatusCode::OK, "read");

            let read: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(read, created);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn read_with_trailing_slash() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.create(collections::MEDICAL_RECORDS, &valid_medical_record())
                .await?;

            let (status, _headers, body) = app
                .request(Method::GET, "/medical-records/1/", None)
                .await?;
            assert_status(status, StatusCode::OK, "read with trailing slash");

            let read: serde_json::Value = serde_json::from_slice(&body)?;
            assert_entity_id(&read, 1);
            assert_eq!(read["diagnosis"], "Hypertension");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn read_returns_404_for_unknown_id() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request(Method::GET, "/doctors/99", None).await?;

            assert_status(status, StatusCode::NOT_FOUND, "read unknown");
            let message = assert_error_body(&body, StatusCode::NOT_FOUND, "not-found")?;
            assert_eq!(message, "Doctor with ID 99 not found");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unparseable_ids_are_lookup_misses() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for (raw, path) in [
                ("abc", "/patients/abc"),
                ("-1", "/patients/-1"),
                ("1.5", "/patients/1.5"),
                ("99999999999999999999999", "/patients/99999999999999999999999"),
            ] {
                let (status, _headers, body) = app.request(Method::GET, path, None).await?;
                assert_status(status, StatusCode::NOT_FOUND, path);
                let message = assert_error_body(&body, StatusCode::NOT_FOUND, "not-found")?;
                assert_eq!(message, format!("Patient with ID {raw} not found"));
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unparseable_id_on_update_and_delete_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(
                    Method::PUT,
                    "/doctors/abc",
                    Some(to_json_body(&valid_doctor())?),
                )
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "update unparseable id");

            let (status, _headers, body) = app.request(Method::DELETE, "/doctors/-1", None).await?;
            assert_status(status, StatusCode::NOT_FOUND, "delete negative id");
            let message = assert_error_body(&body, StatusCode::NOT_FOUND, "not-found")?;
            assert_eq!(message, "Doctor with ID -1 not found");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn collections_are_independent() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.create(collections::PATIENTS, &valid_patient()).await?;

            let (status, _headers, _body) = app.request(Method::GET, "/persons/1000", None).await?;
            assert_status(status, StatusCode::NOT_FOUND, "patient id under persons");
            Ok(())
        })
    })
    .await
}
