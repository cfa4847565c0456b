use axum::{
    body::Body,
    extract::{FromRequest, Path, State},
    http::{header, Request, StatusCode},
    response::IntoResponse,
};
use trackhub::{
    model::{
        api::ErrorDto,
        configuration::{DeviceConfigurationDto, UpdateDeviceConfigurationDto},
    },
    server::controller::{
        configuration::{get_configuration, update_configuration},
        util::extract::ValidatedJson,
    },
};

use super::*;

fn desired(server_ip: &str) -> UpdateDeviceConfigurationDto {
    UpdateDeviceConfigurationDto {
        server_ip: Some(server_ip.to_string()),
        server_port: Some(8000),
        apn_name: Some("internet.carrier".to_string()),
        report_interval: Some(60),
        ..Default::default()
    }
}

mod get_configuration {
    use super::*;

    /// Expect an empty JSON object when nothing has been saved
    #[tokio::test]
    async fn returns_empty_object_when_absent() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;

        let resp = get_configuration(State(app_state(&test)), Path(TEST_IMEI.to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(resp).await;
        assert_eq!(body, serde_json::json!({}));

        Ok(())
    }

    #[tokio::test]
    async fn returns_saved_configuration() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .with_mock_configuration(TEST_IMEI)
            .build()
            .await?;

        let resp = get_configuration(State(app_state(&test)), Path(TEST_IMEI.to_string()))
            .await
            .unwrap()
            .into_response();

        let configuration: DeviceConfigurationDto = body_json(resp).await;
        assert_eq!(configuration.imei, TEST_IMEI);
        assert!(configuration.applied_at.is_none());

        Ok(())
    }
}

mod update_configuration {
    use super::*;

    /// Expect a second PUT to replace the first in place
    #[tokio::test]
    async fn upserts_configuration() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;
        let state = app_state(&test);

        let first = update_configuration(
            State(state.clone()),
            Path(TEST_IMEI.to_string()),
            ValidatedJson(desired("203.0.113.10")),
        )
        .await
        .unwrap()
        .into_response();
        let first: DeviceConfigurationDto = body_json(first).await;

        let second = update_configuration(
            State(state.clone()),
            Path(TEST_IMEI.to_string()),
            ValidatedJson(desired("198.51.100.7")),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(second.status(), StatusCode::OK);
        let second: DeviceConfigurationDto = body_json(second).await;
        assert_eq!(second.id, first.id);
        assert_eq!(second.server_ip.as_deref(), Some("198.51.100.7"));

        let resp = get_configuration(State(state), Path(TEST_IMEI.to_string()))
            .await
            .unwrap()
            .into_response();
        let stored: DeviceConfigurationDto = body_json(resp).await;
        assert_eq!(stored.server_ip.as_deref(), Some("198.51.100.7"));

        Ok(())
    }

    /// Expect 400 with a detail per missing required field
    #[tokio::test]
    async fn rejects_missing_required_fields() {
        let req = Request::builder()
            .method("PUT")
            .uri("/api/vehicles/864696060000001/configuration")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"serverDomain":"tracker.example.com"}"#))
            .unwrap();

        let result = ValidatedJson::<UpdateDeviceConfigurationDto>::from_request(req, &()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        let fields: Vec<String> = body.details.unwrap().into_iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["apnName", "serverIp", "serverPort"]);
    }
}
