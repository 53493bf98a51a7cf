//! `/metrics` handler

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use prometheus::{Encoder, TextEncoder};

use crate::{db::Entity, metrics::record_collection_size, state::AppState};
use clinic_models::{Appointment, Billing, Doctor, MedicalRecord, Patient, Person, Prescription};

/// Prometheus text exposition of every registered metric.
///
/// Collection sizes are refreshed from the repositories first, so the gauges
/// are current even for collections that have not changed since startup.
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    refresh_collection_sizes(&state).await;

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("Content-Type", "text/plain".to_string())],
            b"Failed to encode metrics".to_vec(),
        );
    }

    (
        StatusCode::OK,
        [("Content-Type", encoder.format_type().to_string())],
        buffer,
    )
}

async fn refresh_collection_sizes(state: &AppState) {
    let sizes = [
        (Person::COLLECTION, state.persons.len().await),
        (Patient::COLLECTION, state.patients.len().await),
        (Doctor::COLLECTION, state.doctors.len().await),
        (Appointment::COLLECTION, state.appointments.len().await),
        (Billing::COLLECTION, state.billings.len().await),
        (MedicalRecord::COLLECTION, state.medical_records.len().await),
        (Prescription::COLLECTION, state.prescriptions.len().await),
    ];
    for (collection, size) in sizes {
        record_collection_size(collection, size);
    }
}
