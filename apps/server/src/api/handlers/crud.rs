//! CRUD operation handlers, generic over the entity type

use crate::{
    api::extractors::{JsonBody, PathId},
    db::{Entity, Repository},
    Result,
};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// `GET /{collection}`
#[tracing::instrument(name = "list", skip_all, fields(collection = T::COLLECTION))]
pub async fn list_entities<T: Entity>(
    State(repository): State<Arc<Repository<T>>>,
) -> Result<Json<Vec<T>>> {
    Ok(Json(repository.list().await))
}

/// `GET /{collection}/{id}`
#[tracing::instrument(
    name = "read",
    skip_all,
    fields(collection = T::COLLECTION, id = tracing::field::Empty)
)]
pub async fn read_entity<T: Entity>(
    State(repository): State<Arc<Repository<T>>>,
    path: PathId<T>,
) -> Result<Json<T>> {
    let id = path.id;
    tracing::Span::current().record("id", id);
    let entity = repository.get(id).await?;
    Ok(Json(entity))
}

/// `POST /{collection}`
///
/// Responds `201 Created` with the stored entity and its `Location`.
#[tracing::instrument(name = "create", skip_all, fields(collection = T::COLLECTION))]
pub async fn create_entity<T: Entity>(
    State(repository): State<Arc<Repository<T>>>,
    JsonBody(entity): JsonBody<T>,
) -> Result<Response> {
    let created = repository.add(entity).await?;
    let location = format!("/{}/{}", T::COLLECTION, created.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// `PUT /{collection}/{id}`
#[tracing::instrument(
    name = "update",
    skip_all,
    fields(collection = T::COLLECTION, id = tracing::field::Empty)
)]
pub async fn update_entity<T: Entity>(
    State(repository): State<Arc<Repository<T>>>,
    path: PathId<T>,
    JsonBody(values): JsonBody<T>,
) -> Result<Json<T>> {
    let id = path.id;
    tracing::Span::current().record("id", id);
    let updated = repository.update(id, values).await?;
    Ok(Json(updated))
}

/// `DELETE /{collection}/{id}`
#[tracing::instrument(
    name = "delete",
    skip_all,
    fields(collection = T::COLLECTION, id = tracing::field::Empty)
)]
pub async fn delete_entity<T: Entity>(
    State(repository): State<Arc<Repository<T>>>,
    path: PathId<T>,
) -> Result<StatusCode> {
    let id = path.id;
    tracing::Span::current().record("id", id);
    repository.delete(id).await?;
    Ok(StatusCode::OK)
}
