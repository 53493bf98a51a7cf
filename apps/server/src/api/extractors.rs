//! Custom Axum extractors that report failures through the crate's error
//! taxonomy, so malformed input always yields a JSON error body.

use crate::{db::Entity, Error};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use clinic_models::EntityId;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// JSON request body decoded into `T`.
///
/// Unlike `axum::Json` this does not insist on a `content-type` header, and a
/// body that fails to decode is reported as invalid data (400).
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Keep the body-limit rejection (413) as is
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            Error::InvalidData(format!("Malformed JSON body: {e}")).into_response()
        })
    }
}

/// Entity id taken from the `:id` path segment.
///
/// A segment that is not a valid id cannot name a stored entity, so it is
/// reported as a lookup miss on `T` (404), like any unknown id.
pub struct PathId<T> {
    pub id: EntityId,
    entity: PhantomData<fn() -> T>,
}

#[async_trait]
impl<S, T> FromRequestParts<S> for PathId<T>
where
    S: Send + Sync,
    T: Entity,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::InvalidData(e.body_text()))?;

        match raw.parse::<EntityId>() {
            Ok(id) => Ok(PathId {
                id,
                entity: PhantomData,
            }),
            Err(_) => {
                tracing::debug!(collection = T::COLLECTION, raw = %raw, "Unparseable entity id");
                Err(Error::not_found(T::KIND, raw))
            }
        }
    }
}
