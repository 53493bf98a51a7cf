//! Person-like records
//!
//! `Patient` and `Doctor` reuse the person fields by embedding
//! [`PersonDetails`]; on the wire the embedded fields are flattened so a
//! patient serializes as a single flat object.

use crate::EntityId;
use serde::{Deserialize, Serialize};

/// Fields shared by every person-like record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonDetails {
    pub name: String,

    /// Phone number, ten digits
    #[serde(alias = "contactInformation")]
    pub contact: String,

    pub address: String,
}

impl PersonDetails {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: EntityId,

    #[serde(flatten)]
    pub person: PersonDetails,
}

impl Person {
    pub fn new(person: PersonDetails) -> Self {
        Self { id: 0, person }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
    pub id: EntityId,

    #[serde(flatten)]
    pub person: PersonDetails,

    pub medical_history: String,

    pub current_health_status: String,

    /// Specialist suggested from the medical history; assigned by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_specialization: Option<String>,
}

impl Patient {
    pub fn new(
        person: PersonDetails,
        medical_history: impl Into<String>,
        current_health_status: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            person,
            medical_history: medical_history.into(),
            current_health_status: current_health_status.into(),
            recommended_specialization: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Doctor {
    pub id: EntityId,

    #[serde(flatten)]
    pub person: PersonDetails,

    pub specialization: String,
}

impl Doctor {
    pub fn new(person: PersonDetails, specialization: impl Into<String>) -> Self {
        Self {
            id: 0,
            person,
            specialization: specialization.into(),
        }
    }
}
