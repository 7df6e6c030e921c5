//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service could not be reached or answered garbage
    #[error("External service error: {0}")]
    ExternalService(String),

    /// External service answered with an error message meant for the user
    #[error("{0}")]
    ServiceRejected(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if the error came from outside the process
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::ExternalService(_) | Self::ServiceRejected(_)
        )
    }
}
