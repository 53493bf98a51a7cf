//! Sample records loaded at startup
//!
//! Seeds go through the regular `add` path, so they are validated and receive
//! ids from each repository's allocator like any client-created record.

use crate::{state::AppState, Result};
use clinic_models::{
    Appointment, Billing, Doctor, MedicalRecord, Patient, Person, PersonDetails, Prescription,
};
use rust_decimal::Decimal;

pub async fn seed_sample_data(state: &AppState) -> Result<()> {
    for person in sample_persons() {
        state.persons.add(person).await?;
    }

    let mut patients = Vec::new();
    for patient in sample_patients() {
        patients.push(state.patients.add(patient).await?);
    }

    let mut doctors = Vec::new();
    for doctor in sample_doctors() {
        doctors.push(state.doctors.add(doctor).await?);
    }

    let purposes = ["Diagnostic Test", "Regular Checkup", "Follow-up Consultation"];
    for ((patient, doctor), purpose) in patients.iter().zip(&doctors).zip(purposes) {
        state
            .appointments
            .add(Appointment {
                id: 0,
                patient: patient.clone(),
                doctor: doctor.clone(),
                date: "2024-05-01".to_string(),
                time: "10:00 AM".to_string(),
                purpose: purpose.to_string(),
            })
            .await?;
    }

    let invoices = [(200, 150, 50), (350, 300, 50), (120, 60, 60)];
    for ((patient, doctor), (invoice, payment, balance)) in
        patients.iter().zip(&doctors).zip(invoices)
    {
        state
            .billings
            .add(Billing {
                id: 0,
                patient: patient.clone(),
                doctor: doctor.clone(),
                invoice_amount: Decimal::from(invoice),
                payment_amount: Decimal::from(payment),
                outstanding_balance: Decimal::from(balance),
            })
            .await?;
    }

    let records = [
        ("Arrhythmia", "Beta blockers"),
        ("Type 2 diabetes", "Insulin therapy"),
        ("Contact dermatitis", "Topical corticosteroids"),
    ];
    for ((patient, doctor), (diagnosis, treatments)) in
        patients.iter().zip(&doctors).zip(records)
    {
        state
            .medical_records
            .add(MedicalRecord {
                id: 0,
                patient: patient.clone(),
                doctor: doctor.clone(),
                date: "2024-04-15".to_string(),
                diagnosis: diagnosis.to_string(),
                treatments: treatments.to_string(),
            })
            .await?;
    }

    let prescriptions = [
        ("Metoprolol", "50mg", "Once daily", 30),
        ("Metformin", "500mg", "Twice daily with meals", 90),
        ("Hydrocortisone cream", "1%", "Apply to affected area", 14),
    ];
    for ((patient, doctor), (medication, dosage, instructions, days)) in
        patients.iter().zip(&doctors).zip(prescriptions)
    {
        state
            .prescriptions
            .add(Prescription {
                id: 0,
                patient: patient.clone(),
                doctor: doctor.clone(),
                medication: medication.to_string(),
                dosage: dosage.to_string(),
                instructions: instructions.to_string(),
                duration_in_days: days,
            })
            .await?;
    }

    tracing::info!(
        persons = state.persons.len().await,
        patients = state.patients.len().await,
        doctors = state.doctors.len().await,
        "Sample data loaded"
    );

    Ok(())
}

fn sample_persons() -> Vec<Person> {
    vec![
        Person::new(PersonDetails::new("John Doe", "1234567890", "123 Main St")),
        Person::new(PersonDetails::new("Alice Smith", "2345678901", "456 Elm St")),
        Person::new(PersonDetails::new("Bob Johnson", "3456789012", "789 Oak St")),
    ]
}

fn sample_patients() -> Vec<Patient> {
    vec![
        Patient::new(
            PersonDetails::new("John Doe", "1234567890", "123 Main St"),
            "Heart condition",
            "Stable",
        ),
        Patient::new(
            PersonDetails::new("Alice Smith", "4567890123", "456 Oak St"),
            "Diabetes",
            "Under treatment",
        ),
        Patient::new(
            PersonDetails::new("Bob Johnson", "7890123456", "789 Elm St"),
            "Allergy",
            "Recovering",
        ),
    ]
}

fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(
            PersonDetails::new("Dr. John Doe", "1234567890", "123 Main St"),
            "Cardiologist",
        ),
        Doctor::new(
            PersonDetails::new("Dr. Alice Smith", "4567890123", "456 Oak St"),
            "Endocrinologist",
        ),
        Doctor::new(
            PersonDetails::new("Dr. Bob Johnson", "7890123456", "789 Pine St"),
            "Dermatologist",
        ),
    ]
}
