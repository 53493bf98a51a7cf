//! Clinic entity models
//!
//! Plain, serde-serializable records for the clinic backend. The records carry
//! no behavior beyond construction helpers; field rules live in
//! `clinic-validator` and storage lives in the server's repositories.
//!
//! # Module Organization
//!
//! - `person`: the shared person fields and the `Person`, `Patient` and
//!   `Doctor` records that embed them
//! - `clinical`: `Appointment`, `MedicalRecord` and `Prescription`
//! - `billing`: `Billing`
//!
//! Dependent records (appointments, billings, ...) embed their patient and
//! doctor by value. There is no referential link to the canonical patient or
//! doctor record.
//!
//! # Example
//!
//! ```rust
//! use clinic_models::{Patient, PersonDetails};
//! use serde_json::json;
//!
//! let patient: Patient = serde_json::from_value(json!({
//!     "name": "John Doe",
//!     "contact": "1234567890",
//!     "address": "123 Main St",
//!     "medicalHistory": "Heart condition",
//!     "currentHealthStatus": "Stable"
//! }))
//! .unwrap();
//!
//! assert_eq!(patient.id, 0);
//! assert_eq!(patient.person, PersonDetails::new("John Doe", "1234567890", "123 Main St"));
//! ```

pub mod billing;
pub mod clinical;
pub mod person;

// Re-export commonly used types
pub use billing::Billing;
pub use clinical::{Appointment, MedicalRecord, Prescription};
pub use person::{Doctor, Patient, Person, PersonDetails};

/// Identifier type shared by every entity. `0` means "not yet assigned".
pub type EntityId = u64;
