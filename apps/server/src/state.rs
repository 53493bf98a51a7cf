//! Application state shared by every request handler

use crate::{config::Config, db::Repository, seed};
use axum::extract::FromRef;
use clinic_models::{
    Appointment, Billing, Doctor, MedicalRecord, Patient, Person, Prescription,
};
use std::sync::Arc;

/// Composition root: configuration plus one repository per entity type.
///
/// Cloning is cheap; every clone shares the same repositories.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub persons: Arc<Repository<Person>>,
    pub patients: Arc<Repository<Patient>>,
    pub doctors: Arc<Repository<Doctor>>,
    pub appointments: Arc<Repository<Appointment>>,
    pub billings: Arc<Repository<Billing>>,
    pub medical_records: Arc<Repository<MedicalRecord>>,
    pub prescriptions: Arc<Repository<Prescription>>,
}

impl AppState {
    /// Build empty repositories using the configured allocator start values,
    /// then seed them when `storage.seed_sample_data` is set.
    pub async fn new(config: Config) -> crate::Result<Self> {
        let ids = &config.storage.ids;
        let state = Self {
            persons: Arc::new(Repository::new(ids.persons)),
            patients: Arc::new(Repository::new(ids.patients)),
            doctors: Arc::new(Repository::new(ids.doctors)),
            appointments: Arc::new(Repository::new(ids.appointments)),
            billings: Arc::new(Repository::new(ids.billings)),
            medical_records: Arc::new(Repository::new(ids.medical_records)),
            prescriptions: Arc::new(Repository::new(ids.prescriptions)),
            config: Arc::new(config),
        };

        if state.config.storage.seed_sample_data {
            seed::seed_sample_data(&state).await?;
        }

        Ok(state)
    }
}

macro_rules! repository_from_state {
    ($ty:ty, $field:ident) => {
        impl FromRef<AppState> for Arc<Repository<$ty>> {
            fn from_ref(state: &AppState) -> Self {
                state.$field.clone()
            }
        }
    };
}

repository_from_state!(Person, persons);
repository_from_state!(Patient, patients);
repository_from_state!(Doctor, doctors);
repository_from_state!(Appointment, appointments);
repository_from_state!(Billing, billings);
repository_from_state!(MedicalRecord, medical_records);
repository_from_state!(Prescription, prescriptions);
