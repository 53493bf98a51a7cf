//! Clinic Server
//!
//! An in-memory REST backend for a small clinic. Each collection (persons,
//! patients, doctors, appointments, billings, medical records and
//! prescriptions) is held in its own [`db::Repository`] and exposed through
//! the same five operations: list, read, create, update and delete.
//!
//! Nothing is persisted; every process start begins from empty collections,
//! optionally seeded with sample records.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod seed;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
