//! Request handlers.
//!
//! Handlers validate and deserialize input, delegate to the service layer,
//! and map errors via [`AppError`](crate::error::AppError).

pub mod student;
