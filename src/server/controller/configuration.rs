use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::{
        api::ErrorDto,
        configuration::{DeviceConfigurationDto, UpdateDeviceConfigurationDto},
    },
    server::{
        controller::util::extract::ValidatedJson, error::Error, model::app::AppState,
        service::configuration::ConfigurationService,
    },
};

pub static CONFIGURATION_TAG: &str = "configuration";

/// Get the desired configuration of a tracker
///
/// Responds with an empty object when no configuration has been saved.
#[utoipa::path(
    get,
    path = "/api/vehicles/{imei}/configuration",
    tag = CONFIGURATION_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI")),
    responses(
        (status = 200, description = "Desired configuration, or an empty object", body = DeviceConfigurationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_configuration(
    State(state): State<AppState>,
    Path(imei): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let configuration_service = ConfigurationService::new(state.store.as_ref());

    let response = match configuration_service.get_configuration(&imei).await? {
        Some(configuration) => (StatusCode::OK, Json(configuration)).into_response(),
        None => (StatusCode::OK, Json(json!({}))).into_response(),
    };

    Ok(response)
}

/// Replace the desired configuration of a tracker
#[utoipa::path(
    put,
    path = "/api/vehicles/{imei}/configuration",
    tag = CONFIGURATION_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI")),
    request_body = UpdateDeviceConfigurationDto,
    responses(
        (status = 200, description = "Configuration stored", body = DeviceConfigurationDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_configuration(
    State(state): State<AppState>,
    Path(imei): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateDeviceConfigurationDto>,
) -> Result<impl IntoResponse, Error> {
    let configuration_service = ConfigurationService::new(state.store.as_ref());

    let configuration = configuration_service
        .update_configuration(&imei, request)
        .await?;

    Ok((StatusCode::OK, Json(configuration)))
}
