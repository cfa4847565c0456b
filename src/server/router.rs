//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/vehicles` - List vehicles
/// - `GET /api/vehicles/{imei}` - Get a vehicle
/// - `GET /api/vehicles/{imei}/data` - Latest telemetry samples
/// - `POST /api/vehicles/{imei}/commands/block` - Queue a block/unblock command
/// - `POST /api/vehicles/{imei}/commands/server-config` - Queue a server endpoint command
/// - `POST /api/vehicles/{imei}/commands/apn-config` - Queue an APN settings command
/// - `GET /api/vehicles/{imei}/commands` - Command history
/// - `GET /api/vehicles/{imei}/configuration` - Desired configuration
/// - `PUT /api/vehicles/{imei}/configuration` - Replace desired configuration
/// - `GET /api/messages/{cpf}` - Owner messages
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and browsable through
/// Swagger UI at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Trackhub", description = "GPS tracker dashboard API"), tags(
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles and telemetry"),
        (name = controller::command::COMMAND_TAG, description = "Tracker command queueing"),
        (name = controller::configuration::CONFIGURATION_TAG, description = "Desired device configuration"),
        (name = controller::message::MESSAGE_TAG, description = "Owner messages"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::vehicle::get_vehicles))
        .routes(routes!(controller::vehicle::get_vehicle))
        .routes(routes!(controller::vehicle::get_vehicle_data))
        .routes(routes!(controller::command::queue_block_command))
        .routes(routes!(controller::command::queue_server_config_command))
        .routes(routes!(controller::command::queue_apn_config_command))
        .routes(routes!(controller::command::get_commands))
        .routes(routes!(
            controller::configuration::get_configuration,
            controller::configuration::update_configuration
        ))
        .routes(routes!(controller::message::get_messages))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
