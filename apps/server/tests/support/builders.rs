use axum::body::Bytes;
use serde_json::{json, Map, Value};

/// Converts a JSON value to request body bytes
pub fn to_json_body(value: &Value) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}

/// Builder for Patient payloads
pub struct PatientBuilder {
    id: Option<u64>,
    name: String,
    contact: String,
    address: String,
    medical_history: String,
    current_health_status: String,
}

impl PatientBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: "John Doe".to_string(),
            contact: "1234567890".to_string(),
            address: "123 Main St".to_string(),
            medical_history: "Heart condition".to_string(),
            current_health_status: "Stable".to_string(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn medical_history(mut self, history: impl Into<String>) -> Self {
        self.medical_history = history.into();
        self
    }

    pub fn current_health_status(mut self, status: impl Into<String>) -> Self {
        self.current_health_status = status.into();
        self
    }

    pub fn build(self) -> Value {
        let mut patient = json!({
            "name": self.name,
            "contact": self.contact,
            "address": self.address,
            "medicalHistory": self.medical_history,
            "currentHealthStatus": self.current_health_status
        });
        with_id(&mut patient, self.id);
        patient
    }
}

impl Default for PatientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Doctor payloads
pub struct DoctorBuilder {
    id: Option<u64>,
    name: String,
    contact: String,
    address: String,
    specialization: String,
}

impl DoctorBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: "Dr. Alice Smith".to_string(),
            contact: "4567890123".to_string(),
            address: "456 Oak St".to_string(),
            specialization: "Cardiologist".to_string(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    pub fn build(self) -> Value {
        let mut doctor = json!({
            "name": self.name,
            "contact": self.contact,
            "address": self.address,
            "specialization": self.specialization
        });
        with_id(&mut doctor, self.id);
        doctor
    }
}

impl Default for DoctorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the entities that reference a patient and a doctor
/// (appointments, billings, medical records, prescriptions).
///
/// Starts from the embedded pair and accepts arbitrary extra members.
pub struct VisitBuilder {
    id: Option<u64>,
    patient: Value,
    doctor: Value,
    fields: Map<String, Value>,
}

impl VisitBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            patient: PatientBuilder::new().build(),
            doctor: DoctorBuilder::new().build(),
            fields: Map::new(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn patient(mut self, patient: Value) -> Self {
        self.patient = patient;
        self
    }

    pub fn doctor(mut self, doctor: Value) -> Self {
        self.doctor = doctor;
        self
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        let mut visit = Map::new();
        visit.insert("patient".to_string(), self.patient);
        visit.insert("doctor".to_string(), self.doctor);
        visit.extend(self.fields);
        let mut visit = Value::Object(visit);
        with_id(&mut visit, self.id);
        visit
    }
}

impl Default for VisitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn with_id(value: &mut Value, id: Option<u64>) {
    if let (Some(id), Some(object)) = (id, value.as_object_mut()) {
        object.insert("id".to_string(), json!(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_builder_is_flat() {
        let patient = PatientBuilder::new().id(7).name("Jane Roe").build();
        assert_eq!(patient["id"], 7);
        assert_eq!(patient["name"], "Jane Roe");
        assert!(patient.get("person").is_none());
    }

    #[test]
    fn visit_builder_embeds_patient_and_doctor() {
        let visit = VisitBuilder::new().field("date", "2024-03-14").build();
        assert_eq!(visit["patient"]["medicalHistory"], "Heart condition");
        assert_eq!(visit["doctor"]["specialization"], "Cardiologist");
        assert_eq!(visit["date"], "2024-03-14");
        assert!(visit.get("id").is_none());
    }
}
