//! Field-rule validation for clinic entities
//!
//! Every entity implements [`Validate`]. Validation is pure and
//! short-circuiting: the first violated rule is reported and the remaining
//! rules are not evaluated. Dependent records validate their embedded patient
//! and doctor before their own fields.

mod error;
mod rules;

pub use error::ValidationError;
pub use rules::{is_valid_contact, is_valid_date, DATE_FORMAT};

use clinic_models::{
    Appointment, Billing, Doctor, MedicalRecord, Patient, Person, PersonDetails, Prescription,
};
use rust_decimal::Decimal;

pub type Result<T = ()> = std::result::Result<T, ValidationError>;

/// Field-level invariants of an entity
pub trait Validate {
    fn validate(&self) -> Result;
}

/// Chain of checks for one entity label; stops at the first failure.
struct Checks {
    entity: &'static str,
}

impl Checks {
    fn new(entity: &'static str) -> Self {
        Self { entity }
    }

    fn required(&self, field: &'static str, value: &str, message: &str) -> Result {
        if rules::is_blank(value) {
            return Err(self.fail(field, message));
        }
        Ok(())
    }

    fn positive(&self, field: &'static str, value: Decimal, message: &str) -> Result {
        if value <= Decimal::ZERO {
            return Err(self.fail(field, message));
        }
        Ok(())
    }

    fn date(&self, field: &'static str, value: &str) -> Result {
        if !is_valid_date(value) {
            return Err(self.fail(
                field,
                &format!("{field} is required in the format YYYY-MM-DD"),
            ));
        }
        Ok(())
    }

    fn fail(&self, field: &'static str, message: &str) -> ValidationError {
        ValidationError::new(self.entity, field, message)
    }
}

impl Validate for PersonDetails {
    fn validate(&self) -> Result {
        let checks = Checks::new("person");
        checks.required("name", &self.name, "name is required")?;
        if !is_valid_contact(&self.contact) {
            return Err(checks.fail("contact", "invalid phone number"));
        }
        checks.required("address", &self.address, "address is required")
    }
}

impl Validate for Person {
    fn validate(&self) -> Result {
        self.person.validate()
    }
}

impl Validate for Patient {
    fn validate(&self) -> Result {
        self.person.validate()?;

        let checks = Checks::new("patient");
        checks.required(
            "medicalHistory",
            &self.medical_history,
            "medical history is required",
        )?;
        checks.required(
            "currentHealthStatus",
            &self.current_health_status,
            "current health status is required",
        )
    }
}

impl Validate for Doctor {
    fn validate(&self) -> Result {
        self.person.validate()?;

        Checks::new("doctor").required(
            "specialization",
            &self.specialization,
            "specialization is required",
        )
    }
}

impl Validate for Appointment {
    fn validate(&self) -> Result {
        self.patient.validate()?;
        self.doctor.validate()?;

        Checks::new("appointment").date("date", &self.date)
    }
}

impl Validate for Billing {
    fn validate(&self) -> Result {
        self.patient.validate()?;
        self.doctor.validate()?;

        let checks = Checks::new("billing");
        checks.positive(
            "invoiceAmount",
            self.invoice_amount,
            "invoice amount should be greater than zero",
        )?;
        checks.positive(
            "paymentAmount",
            self.payment_amount,
            "payment amount should be greater than zero",
        )?;
        checks.positive(
            "outstandingBalance",
            self.outstanding_balance,
            "outstanding balance should be greater than zero",
        )
    }
}

impl Validate for MedicalRecord {
    fn validate(&self) -> Result {
        self.patient.validate()?;
        self.doctor.validate()?;

        let checks = Checks::new("medical record");
        checks.date("date", &self.date)?;
        checks.required("diagnosis", &self.diagnosis, "diagnosis is required")?;
        checks.required("treatments", &self.treatments, "treatment is required")
    }
}

impl Validate for Prescription {
    fn validate(&self) -> Result {
        self.patient.validate()?;
        self.doctor.validate()?;

        let checks = Checks::new("prescription");
        checks.required(
            "medication",
            &self.medication,
            "medication name is required",
        )?;
        checks.required("dosage", &self.dosage, "dosage information is required")?;
        checks.required(
            "instructions",
            &self.instructions,
            "instructions are required",
        )?;
        if self.duration_in_days <= 0 {
            return Err(checks.fail(
                "durationInDays",
                "duration must be greater than 0 days",
            ));
        }
        Ok(())
    }
}
