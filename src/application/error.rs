//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot parse token '{token}' at position {position}: expected a node index or root marker")]
    Parse { token: String, position: usize },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("result does not dominate nodes: {undominated:?}")]
    VerificationFailed { undominated: Vec<usize> },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
