//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with `State` built from an in-memory database, then the
//! response status and JSON body are checked.

mod command;
mod configuration;
mod message;
mod vehicle;

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use trackhub::server::model::app::AppState;
use trackhub_test_utils::prelude::*;

pub static TEST_IMEI: &str = "864696060000001";

/// Read and deserialize a JSON response body
async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_state(test: &TestContext) -> AppState {
    test.to_app_state::<AppState>()
}
