//! Error types for the tracker dashboard server.
//!
//! Domain-specific errors live in submodules (configuration, request validation, vehicle lookup)
//! and are aggregated into [`Error`]. Every error implements `IntoResponse`, so handlers can
//! return `Result<impl IntoResponse, Error>` and rely on `?` for propagation.

pub mod config;
pub mod validation;
pub mod vehicle;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError, vehicle::VehicleError},
};

/// Main error type for the server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (malformed request bodies or query strings)
/// - Vehicle errors (vehicle lookup by IMEI)
/// - Database errors (query failures, missing tables, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request validation error, reported to the client with field details.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Vehicle lookup error.
    #[error(transparent)]
    VehicleError(#[from] VehicleError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Request body or query failed validation
/// - 404 Not Found - Vehicle does not exist
/// - 500 Internal Server Error - Everything else (logged, never echoed to the client)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::VehicleError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body so storage or
/// configuration details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
