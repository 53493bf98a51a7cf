//! Request handlers for API endpoints
//!
//! Handlers translate a request into a repository call and the outcome into a
//! status code; they hold no business rules of their own.

pub mod crud;
pub mod metrics;

pub use crud::*;
pub use metrics::*;
