use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Domain error: {0}")]
    DomainError(String),
}
