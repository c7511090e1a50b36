//! Service layer.
//!
//! Services orchestrate repository calls, own transaction boundaries and
//! apply business rules. Handlers stay thin and delegate here.

pub mod converter;
pub mod student_service;

use enrollment_core::error::CoreError;

pub use student_service::{StudentSearch, StudentService};

/// Failure raised by a service call. No recovery happens at this layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
