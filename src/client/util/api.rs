//! Browser-side calls to the tracker JSON API.

use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    api::{CommandCreatedDto, ErrorDto},
    command::{ApnConfigCommandDto, BlockCommandDto, CommandDto, ServerConfigCommandDto},
    configuration::{DeviceConfigurationDto, UpdateDeviceConfigurationDto},
    vehicle::{VehicleDataDto, VehicleDto},
};

/// Retrieve all registered vehicles
pub async fn get_vehicles() -> Result<Vec<VehicleDto>, String> {
    get_json("/api/vehicles").await
}

pub async fn get_vehicle(imei: &str) -> Result<VehicleDto, String> {
    get_json(&format!("/api/vehicles/{}", imei)).await
}

/// Retrieve the latest telemetry samples, most recent first
pub async fn get_vehicle_data(imei: &str, limit: u64) -> Result<Vec<VehicleDataDto>, String> {
    get_json(&format!("/api/vehicles/{}/data?limit={}", imei, limit)).await
}

pub async fn get_commands(imei: &str) -> Result<Vec<CommandDto>, String> {
    get_json(&format!("/api/vehicles/{}/commands", imei)).await
}

pub async fn send_block_command(
    imei: &str,
    body: &BlockCommandDto,
) -> Result<CommandCreatedDto, String> {
    send_json("POST", &format!("/api/vehicles/{}/commands/block", imei), body).await
}

pub async fn send_server_config_command(
    imei: &str,
    body: &ServerConfigCommandDto,
) -> Result<CommandCreatedDto, String> {
    send_json(
        "POST",
        &format!("/api/vehicles/{}/commands/server-config", imei),
        body,
    )
    .await
}

pub async fn send_apn_config_command(
    imei: &str,
    body: &ApnConfigCommandDto,
) -> Result<CommandCreatedDto, String> {
    send_json(
        "POST",
        &format!("/api/vehicles/{}/commands/apn-config", imei),
        body,
    )
    .await
}

/// Retrieve the desired configuration; `Ok(None)` when none has been saved
pub async fn get_configuration(imei: &str) -> Result<Option<DeviceConfigurationDto>, String> {
    let value: serde_json::Value = get_json(&format!("/api/vehicles/{}/configuration", imei)).await?;

    if value.as_object().is_some_and(|o| o.is_empty()) {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| format!("Failed to parse configuration: {}", e))
}

pub async fn update_configuration(
    imei: &str,
    body: &UpdateDeviceConfigurationDto,
) -> Result<DeviceConfigurationDto, String> {
    send_json("PUT", &format!("/api/vehicles/{}/configuration", imei), body).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: &B,
) -> Result<T, String> {
    let body =
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    let request = match method {
        "PUT" => Request::put(url),
        _ => Request::post(url),
    };

    let response = request
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        status => {
            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                let details = error_dto
                    .details
                    .unwrap_or_default()
                    .into_iter()
                    .map(|d| format!("{}: {}", d.field, d.message))
                    .collect::<Vec<_>>()
                    .join(", ");

                if details.is_empty() {
                    Err(format!("Request failed with status {}: {}", status, error_dto.error))
                } else {
                    Err(format!(
                        "Request failed with status {}: {} ({})",
                        status, error_dto.error, details
                    ))
                }
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!("Request failed with status {}: {}", status, error_text))
            }
        }
    }
}
