//! REST collection routes
//!
//! Every entity type gets the same five routes:
//!
//! - `GET    /{collection}`      list
//! - `POST   /{collection}`      create
//! - `GET    /{collection}/{id}` read
//! - `PUT    /{collection}/{id}` update
//! - `DELETE /{collection}/{id}` delete
//!
//! Both the plain and the trailing-slash form of each path are registered
//! directly, without redirects.

use crate::api::handlers::crud::{
    create_entity, delete_entity, list_entities, read_entity, update_entity,
};
use crate::db::{Entity, Repository};
use crate::state::AppState;
use axum::{
    extract::FromRef,
    routing::{get, MethodRouter},
    Router,
};
use clinic_models::{
    Appointment, Billing, Doctor, MedicalRecord, Patient, Person, Prescription,
};
use std::sync::Arc;

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .merge(collection_routes::<Person>())
        .merge(collection_routes::<Patient>())
        .merge(collection_routes::<Doctor>())
        .merge(collection_routes::<Appointment>())
        .merge(collection_routes::<Billing>())
        .merge(collection_routes::<MedicalRecord>())
        .merge(collection_routes::<Prescription>())
}

fn collection_routes<T>() -> Router<AppState>
where
    T: Entity,
    Arc<Repository<T>>: FromRef<AppState>,
{
    let collection = format!("/{}", T::COLLECTION);
    let item = format!("/{}/:id", T::COLLECTION);

    Router::new()
        .route(&collection, collection_methods::<T>())
        .route(&format!("{collection}/"), collection_methods::<T>())
        .route(&item, item_methods::<T>())
        .route(&format!("{item}/"), item_methods::<T>())
}

fn collection_methods<T>() -> MethodRouter<AppState>
where
    T: Entity,
    Arc<Repository<T>>: FromRef<AppState>,
{
    get(list_entities::<T>).post(create_entity::<T>)
}

fn item_methods<T>() -> MethodRouter<AppState>
where
    T: Entity,
    Arc<Repository<T>>: FromRef<AppState>,
{
    get(read_entity::<T>)
        .put(update_entity::<T>)
        .delete(delete_entity::<T>)
}
