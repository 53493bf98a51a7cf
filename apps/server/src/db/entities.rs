//! `Entity` implementations for the clinic models

use super::Entity;
use clinic_models::{
    Appointment, Billing, Doctor, EntityId, MedicalRecord, Patient, Person, Prescription,
};

/// Implements `Entity` for a model with a plain `id` field. Trailing field
/// names list embedded entities whose derived fields `prepare` refreshes.
macro_rules! entity {
    ($ty:ty, $kind:literal, $collection:literal $(, $embedded:ident)*) => {
        impl Entity for $ty {
            const KIND: &'static str = $kind;
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> EntityId {
                self.id
            }

            fn set_id(&mut self, id: EntityId) {
                self.id = id;
            }

            fn prepare(&mut self) {
                $(self.$embedded.prepare();)*
            }
        }
    };
}

entity!(Person, "Person", "persons");
entity!(Doctor, "Doctor", "doctors");
entity!(Appointment, "Appointment", "appointments", patient);
entity!(Billing, "Billing", "billings", patient);
entity!(MedicalRecord, "Medical record", "medical-records", patient);
entity!(Prescription, "Prescription", "prescriptions", patient);

/// Every REST collection served, in registration order
pub const COLLECTIONS: [&str; 7] = [
    Person::COLLECTION,
    Patient::COLLECTION,
    Doctor::COLLECTION,
    Appointment::COLLECTION,
    Billing::COLLECTION,
    MedicalRecord::COLLECTION,
    Prescription::COLLECTION,
];

impl Entity for Patient {
    const KIND: &'static str = "Patient";
    const COLLECTION: &'static str = "patients";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn prepare(&mut self) {
        self.recommended_specialization =
            recommended_specialization(&self.medical_history).map(str::to_string);
    }
}

/// Specialist suggested for a patient's medical history, if any keyword matches.
///
/// Keywords are matched case-insensitively; the first matching rule wins.
pub fn recommended_specialization(medical_history: &str) -> Option<&'static str> {
    const RULES: &[(&[&str], &str)] = &[
        (&["heart"], "Cardiologist"),
        (&["allergy", "skin"], "Dermatologist"),
        (&["diabetes"], "Endocrinologist"),
    ];

    let history = medical_history.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| history.contains(k)))
        .map(|(_, specialization)| *specialization)
}
