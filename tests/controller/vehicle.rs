use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use trackhub::{
    model::{
        api::ErrorDto,
        vehicle::{VehicleDataDto, VehicleDto},
    },
    server::controller::{
        util::query::LimitQuery,
        vehicle::{get_vehicle, get_vehicle_data, get_vehicles},
    },
};

use super::*;

mod get_vehicles {
    use super::*;

    /// Expect 200 with every registered vehicle
    #[tokio::test]
    async fn lists_all_vehicles() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .with_mock_vehicle(TEST_IMEI)
            .with_mock_vehicle("864696060000002")
            .build()
            .await?;

        let resp = get_vehicles(State(app_state(&test)))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let vehicles: Vec<VehicleDto> = body_json(resp).await;
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].imei, TEST_IMEI);

        Ok(())
    }

    /// Expect 500 with a generic body when the schema is missing
    #[tokio::test]
    async fn fails_with_internal_error_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = get_vehicles(State(app_state(&test))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Internal server error");

        Ok(())
    }
}

mod get_vehicle {
    use super::*;

    #[tokio::test]
    async fn returns_vehicle_by_imei() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .with_mock_vehicle(TEST_IMEI)
            .build()
            .await?;

        let resp = get_vehicle(State(app_state(&test)), Path(TEST_IMEI.to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let vehicle: VehicleDto = body_json(resp).await;
        assert_eq!(vehicle.imei, TEST_IMEI);

        Ok(())
    }

    /// Expect 404 with the not found body for an unknown IMEI
    #[tokio::test]
    async fn returns_not_found_for_unknown_imei() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;

        let result = get_vehicle(State(app_state(&test)), Path("000000000000000".to_string())).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Vehicle not found");

        Ok(())
    }
}

mod get_vehicle_data {
    use super::*;

    /// Expect `limit=5` to cap the samples, newest first
    #[tokio::test]
    async fn caps_samples_at_limit() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .with_mock_vehicle(TEST_IMEI)
            .with_mock_telemetry(TEST_IMEI, 8)
            .build()
            .await?;

        let resp = get_vehicle_data(
            State(app_state(&test)),
            Path(TEST_IMEI.to_string()),
            Ok(Query(LimitQuery { limit: Some(5) })),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let samples: Vec<VehicleDataDto> = body_json(resp).await;
        assert_eq!(samples.len(), 5);
        assert!(samples
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp));

        Ok(())
    }

    /// Expect every sample when no limit is given and fewer than the default exist
    #[tokio::test]
    async fn uses_default_limit() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .with_mock_telemetry(TEST_IMEI, 3)
            .build()
            .await?;

        let resp = get_vehicle_data(
            State(app_state(&test)),
            Path(TEST_IMEI.to_string()),
            Ok(Query(LimitQuery::default())),
        )
        .await
        .unwrap()
        .into_response();

        let samples: Vec<VehicleDataDto> = body_json(resp).await;
        assert_eq!(samples.len(), 3);

        Ok(())
    }

    /// Expect 400 with details for a negative limit
    #[tokio::test]
    async fn rejects_negative_limit() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;

        let uri: Uri = "/api/vehicles/864696060000001/data?limit=-1".parse().unwrap();
        let query = Query::<LimitQuery>::try_from_uri(&uri);
        assert!(query.is_err());

        let result = get_vehicle_data(State(app_state(&test)), Path(TEST_IMEI.to_string()), query).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.details.unwrap()[0].field, "query");

        Ok(())
    }
}
