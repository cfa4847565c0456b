use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use trackhub::{
    model::message::MessageDto,
    server::controller::{message::get_messages, util::query::LimitQuery},
};

use super::*;

/// Expect only the owner's messages, capped at the limit
#[tokio::test]
async fn lists_messages_for_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_message("12345678900", 4)
        .with_mock_message("98765432100", 2)
        .build()
        .await?;

    let resp = get_messages(
        State(app_state(&test)),
        Path("12345678900".to_string()),
        Ok(Query(LimitQuery { limit: Some(3) })),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let messages: Vec<MessageDto> = body_json(resp).await;
    assert_eq!(messages.len(), 3);
    assert!(messages
        .iter()
        .all(|m| m.cpf.as_deref() == Some("12345678900")));

    Ok(())
}

/// Expect an empty list rather than 404 for an owner without messages
#[tokio::test]
async fn returns_empty_list_for_unknown_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let resp = get_messages(
        State(app_state(&test)),
        Path("00000000000".to_string()),
        Ok(Query(LimitQuery::default())),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let messages: Vec<MessageDto> = body_json(resp).await;
    assert!(messages.is_empty());

    Ok(())
}
