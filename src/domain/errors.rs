// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by domain types and services. `Persistence` wraps
/// whatever the storage layer reported; the other variants carry a
/// human-readable reason that flows through to the API response.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("already exists: {0}")]
    Conflict(String),
    #[error("no such record: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}
