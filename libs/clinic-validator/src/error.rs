use thiserror::Error;

/// The first rule an entity violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {entity} data: {message}")]
pub struct ValidationError {
    entity: &'static str,
    field: &'static str,
    message: String,
}

impl ValidationError {
    pub fn new(entity: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            entity,
            field,
            message: message.into(),
        }
    }

    /// Label of the record that failed, e.g. `patient`
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Wire name of the offending field
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
