//! UPDATE operation tests (PUT /{collection}/{id})

use crate::support::{
    assert_entity_id, assert_error_body, assert_status, collections, to_json_body,
    valid_appointment, valid_patient, valid_prescription, with_test_app, PatientBuilder,
};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.create(collections::PATIENTS, &valid_patient()).await?;

            let changes = PatientBuilder::new()
                .id(5)
                .name("John Q. Doe")
                .medical_history("Skin rash")
                .current_health_status("Recovering")
                .build();
            let (status, _headers, body) = app
                .request(Method::PUT, "/patients/1000", Some(to_json_body(&changes)?))
                .await?;

            assert_status(status, StatusCode::OK, "update");
            let updated: serde_json::Value = serde_json::from_slice(&body)?;
            assert_entity_id(&updated, 1000);
            assert_eq!(updated["name"], "John Q. Doe");
            assert_eq!(updated["recommendedSpecialization"], "Dermatologist");

            let (_status, _headers, body) = app.request(Method::GET, "/patients/1000", None).await?;
            let read: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(read, updated);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn update_unknown_id_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request(
                    Method::PUT,
                    "/appointments/7",
                    Some(to_json_body(&valid_appointment())?),
                )
                .await?;

            assert_status(status, StatusCode::NOT_FOUND, "update unknown");
            let message = assert_error_body(&body, StatusCode::NOT_FOUND, "not-found")?;
            assert_eq!(message, "Appointment with ID 7 not found");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_id_wins_over_invalid_body() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(Method::PUT, "/persons/3", Some(to_json_body(&json!({}))?))
                .await?;

            assert_status(status, StatusCode::NOT_FOUND, "invalid update of unknown id");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn invalid_update_leaves_entity_unchanged() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let created = app
                .create(collections::PRESCRIPTIONS, &valid_prescription())
                .await?;

            let mut changes = valid_prescription();
            changes["durationInDays"] = json!(-3);
            let (status, _headers, body) = app
                .request(
                    Method::PUT,
                    "/prescriptions/1",
                    Some(to_json_body(&changes)?),
                )
                .await?;

            assert_status(status, StatusCode::BAD_REQUEST, "invalid update");
            let message = assert_error_body(&body, StatusCode::BAD_REQUEST, "invalid")?;
            assert_eq!(
                message,
                "Invalid prescription data: duration must be greater than 0 days"
            );

            let (_status, _headers, body) = app
                .request(Method::GET, "/prescriptions/1", None)
                .await?;
            let read: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(read, created);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn update_with_trailing_slash() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.create(collections::APPOINTMENTS, &valid_appointment())
                .await?;

            let mut changes = valid_appointment();
            changes["purpose"] = json!("Follow-up");
            let (status, _headers, body) = app
                .request(
                    Method::PUT,
                    "/appointments/1/",
                    Some(to_json_body(&changes)?),
                )
                .await?;

            assert_status(status, StatusCode::OK, "update with trailing slash");
            let updated: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(updated["purpose"], "Follow-up");
            Ok(())
        })
    })
    .await
}
