//! Utility types for controller request handling.
//!
//! This module provides the validating JSON extractor used by every handler that accepts a
//! request body, and the shared `limit` query parameter of the list endpoints.

pub mod extract;
pub mod query;
