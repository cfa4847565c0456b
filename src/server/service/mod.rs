//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the [`TrackerStore`](crate::server::data::TrackerStore)
//! capability. They map storage models to API DTOs, turn absent vehicles into typed errors, and, for
//! commands, invoke the encoder before persisting the result.

pub mod command;
pub mod configuration;
pub mod message;
pub mod vehicle;

use crate::server::error::validation::ValidationError;

/// Unwraps a request field the validator has already declared required.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::single(field, format!("{field} is required")))
}
