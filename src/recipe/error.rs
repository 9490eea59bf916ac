use thiserror::Error;

/// A required field was missing or blank on create.
///
/// `field` is the wire name of the field, `message` is the user-facing hint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub(crate) fn missing(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}
