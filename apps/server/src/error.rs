//! Error types for the clinic server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinic_models::EntityId;
use clinic_validator::ValidationError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// `id` is kept as text so unparseable path ids report the same way
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} with ID {id} already exists")]
    Duplicate { kind: &'static str, id: EntityId },

    #[error("{0}")]
    InvalidData(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::InvalidData(err.to_string())
    }
}

impl Error {
    pub fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        Error::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Duplicate { .. } => StatusCode::CONFLICT,
            Error::InvalidData(_) => StatusCode::BAD_REQUEST,
            Error::Internal(_) | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
            "An error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "code": status_code_label(status),
            "message": message
        }));

        (status, body).into_response()
    }
}

fn status_code_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "invalid",
        StatusCode::NOT_FOUND => "not-found",
        StatusCode::CONFLICT => "duplicate",
        _ => "exception",
    }
}
