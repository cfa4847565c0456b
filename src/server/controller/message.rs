use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, message::MessageDto},
    server::{
        controller::util::query::LimitQuery,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::message::MessageService,
    },
};

pub static MESSAGE_TAG: &str = "message";

/// Messages returned when no `limit` is given
pub const DEFAULT_MESSAGE_LIMIT: u64 = 50;

/// List the latest messages addressed to a vehicle owner
#[utoipa::path(
    get,
    path = "/api/messages/{cpf}",
    tag = MESSAGE_TAG,
    params(("cpf" = String, Path, description = "Owner CPF"), LimitQuery),
    responses(
        (status = 200, description = "Success when listing messages", body = Vec<MessageDto>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;
    let message_service = MessageService::new(state.store.as_ref());

    let messages = message_service
        .list_messages(&cpf, query.resolve(DEFAULT_MESSAGE_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(messages)))
}
