use super::builders::{DoctorBuilder, PatientBuilder, VisitBuilder};
use serde_json::{json, Value};

/// Collection paths as served by the router
pub mod collections {
    pub const PERSONS: &str = "persons";
    pub const PATIENTS: &str = "patients";
    pub const DOCTORS: &str = "doctors";
    pub const APPOINTMENTS: &str = "appointments";
    pub const BILLINGS: &str = "billings";
    pub const MEDICAL_RECORDS: &str = "medical-records";
    pub const PRESCRIPTIONS: &str = "prescriptions";
}

pub fn valid_person() -> Value {
    json!({
        "name": "John Doe",
        "contact": "1234567890",
        "address": "123 Main St"
    })
}

pub fn valid_patient() -> Value {
    PatientBuilder::new().build()
}

pub fn valid_doctor() -> Value {
    DoctorBuilder::new().build()
}

pub fn valid_appointment() -> Value {
    VisitBuilder::new()
        .field("date", "2024-03-14")
        .field("time", "10:00 AM")
        .field("purpose", "Routine checkup")
        .build()
}

pub fn valid_billing() -> Value {
    VisitBuilder::new()
        .field("invoiceAmount", 250.0)
        .field("paymentAmount", 100.0)
        .field("outstandingBalance", 150.0)
        .build()
}

pub fn valid_medical_record() -> Value {
    VisitBuilder::new()
        .field("date", "2024-03-14")
        .field("diagnosis", "Hypertension")
        .field("treatments", "Lifestyle changes")
        .build()
}

pub fn valid_prescription() -> Value {
    VisitBuilder::new()
        .field("medication", "Aspirin")
        .field("dosage", "100mg")
        .field("instructions", "Once daily")
        .field("durationInDays", 7)
        .build()
}

/// One valid payload per collection
pub fn valid_payloads() -> Vec<(&'static str, Value)> {
    vec![
        (collections::PERSONS, valid_person()),
        (collections::PATIENTS, valid_patient()),
        (collections::DOCTORS, valid_doctor()),
        (collections::APPOINTMENTS, valid_appointment()),
        (collections::BILLINGS, valid_billing()),
        (collections::MEDICAL_RECORDS, valid_medical_record()),
        (collections::PRESCRIPTIONS, valid_prescription()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_payload_per_collection() {
        let payloads = valid_payloads();
        assert_eq!(payloads.len(), 7);
        assert!(payloads.iter().all(|(_, value)| value.get("id").is_none()));
    }
}
