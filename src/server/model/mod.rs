//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers, plus type aliases and DTO conversions for the
//! SeaORM entity models.

pub mod app;
pub mod db;
