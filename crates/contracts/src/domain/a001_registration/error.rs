use thiserror::Error;

/// Failure reported by a preview handle provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("preview provider failed: {0}")]
pub struct PreviewError(pub String);

/// Errors surfaced by the registration form controllers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Image slot {0} is out of range")]
    SlotOutOfRange(usize),

    #[error(transparent)]
    Preview(#[from] PreviewError),
}
