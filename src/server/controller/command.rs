use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CommandCreatedDto, ErrorDto},
        command::{ApnConfigCommandDto, BlockCommandDto, CommandDto, ServerConfigCommandDto},
    },
    server::{
        controller::util::extract::ValidatedJson,
        error::Error,
        model::app::AppState,
        service::command::CommandService,
    },
};

pub static COMMAND_TAG: &str = "command";

/// Queue a block or unblock (GTOUT) command
///
/// The command is encoded for the given tracker model and stored as pending; it is not sent to
/// the device by this service.
#[utoipa::path(
    post,
    path = "/api/vehicles/{imei}/commands/block",
    tag = COMMAND_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI")),
    request_body = BlockCommandDto,
    responses(
        (status = 200, description = "Command encoded and stored", body = CommandCreatedDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn queue_block_command(
    State(state): State<AppState>,
    Path(imei): Path<String>,
    ValidatedJson(request): ValidatedJson<BlockCommandDto>,
) -> Result<impl IntoResponse, Error> {
    let command_service = CommandService::new(state.store.as_ref(), state.command_settings);

    let command = command_service.queue_block(&imei, request).await?;

    Ok((StatusCode::OK, Json(created(&command))))
}

/// Queue a server endpoint (GTSRI) command
#[utoipa::path(
    post,
    path = "/api/vehicles/{imei}/commands/server-config",
    tag = COMMAND_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI")),
    request_body = ServerConfigCommandDto,
    responses(
        (status = 200, description = "Command encoded and stored", body = CommandCreatedDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn queue_server_config_command(
    State(state): State<AppState>,
    Path(imei): Path<String>,
    ValidatedJson(request): ValidatedJson<ServerConfigCommandDto>,
) -> Result<impl IntoResponse, Error> {
    let command_service = CommandService::new(state.store.as_ref(), state.command_settings);

    let command = command_service.queue_server_config(&imei, request).await?;

    Ok((StatusCode::OK, Json(created(&command))))
}

/// Queue an APN settings (GTBSI) command
#[utoipa::path(
    post,
    path = "/api/vehicles/{imei}/commands/apn-config",
    tag = COMMAND_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI")),
    request_body = ApnConfigCommandDto,
    responses(
        (status = 200, description = "Command encoded and stored", body = CommandCreatedDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn queue_apn_config_command(
    State(state): State<AppState>,
    Path(imei): Path<String>,
    ValidatedJson(request): ValidatedJson<ApnConfigCommandDto>,
) -> Result<impl IntoResponse, Error> {
    let command_service = CommandService::new(state.store.as_ref(), state.command_settings);

    let command = command_service.queue_apn_config(&imei, request).await?;

    Ok((StatusCode::OK, Json(created(&command))))
}

/// List the commands queued for a tracker, most recent first
#[utoipa::path(
    get,
    path = "/api/vehicles/{imei}/commands",
    tag = COMMAND_TAG,
    params(("imei" = String, Path, description = "Tracker IMEI")),
    responses(
        (status = 200, description = "Success when listing commands", body = Vec<CommandDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_commands(
    State(state): State<AppState>,
    Path(imei): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let command_service = CommandService::new(state.store.as_ref(), state.command_settings);

    let commands = command_service.list_commands(&imei).await?;

    Ok((StatusCode::OK, Json(commands)))
}

fn created(command: &CommandDto) -> CommandCreatedDto {
    CommandCreatedDto {
        success: true,
        command_id: command.id,
    }
}
