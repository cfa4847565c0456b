use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("Vehicle with IMEI {0} not found")]
    NotFound(String),
}

impl IntoResponse for VehicleError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(imei) => {
                tracing::debug!(imei = %imei, "Vehicle lookup failed");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new("Vehicle not found")),
                )
                    .into_response()
            }
        }
    }
}
