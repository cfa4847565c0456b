use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vehicle::{VehicleDataDto, VehicleDto},
    },
    server::{
        controller::util::query::LimitQuery,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::vehicle::VehicleService,
    },
};

pub static VEHICLE_TAG: &str = "vehicle";

/// Telemetry samples returned when no `limit` is given
pub const DEFAULT_DATA_LIMIT: u64 = 100;

/// List all registered vehicles
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when listing vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicle_service = VehicleService::new(state.store.as_ref());

    let vehicles = vehicle_service.list_vehicles().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a single vehicle by IMEI
#[utoipa::path(
    get,
    path = "/api/vehicles/{imei}",
    tag = VEHICLE_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI")),
    responses(
        (status = 200, description = "Success when retrieving vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(imei): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_service = VehicleService::new(state.store.as_ref());

    let vehicle = vehicle_service.get_vehicle(&imei).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Get the latest telemetry samples of a tracker, most recent first
#[utoipa::path(
    get,
    path = "/api/vehicles/{imei}/data",
    tag = VEHICLE_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI"), LimitQuery),
    responses(
        (status = 200, description = "Success when retrieving telemetry", body = Vec<VehicleDataDto>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_data(
    State(state): State<AppState>,
    Path(imei): Path<String>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;
    let vehicle_service = VehicleService::new(state.store.as_ref());

    let data = vehicle_service
        .list_vehicle_data(&imei, query.resolve(DEFAULT_DATA_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(data)))
}
