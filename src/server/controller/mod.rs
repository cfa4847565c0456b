//! HTTP controller endpoints for the tracker dashboard API.
//!
//! This module contains Axum handlers for vehicles, telemetry, commands, desired device
//! configuration and owner messages. Controllers extract and validate inputs, call the matching
//! service, and return JSON responses. Every handler is annotated with utoipa for the OpenAPI
//! document served at `/api/docs`.

pub mod command;
pub mod configuration;
pub mod message;
pub mod util;
pub mod vehicle;
