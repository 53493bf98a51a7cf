//! Clinical records: appointments, medical records and prescriptions

use crate::{Doctor, EntityId, Patient};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appointment {
    pub id: EntityId,
    pub patient: Patient,
    pub doctor: Doctor,

    /// Calendar date, `YYYY-MM-DD`
    pub date: String,

    /// Free-form time of day, e.g. `10:00 AM`
    pub time: String,

    pub purpose: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalRecord {
    pub id: EntityId,
    pub patient: Patient,
    pub doctor: Doctor,

    /// Calendar date, `YYYY-MM-DD`
    pub date: String,

    pub diagnosis: String,
    pub treatments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prescription {
    pub id: EntityId,
    pub patient: Patient,
    pub doctor: Doctor,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,

    /// Signed so that a negative duration reaches validation instead of
    /// failing to decode
    pub duration_in_days: i32,
}
