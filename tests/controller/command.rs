use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use trackhub::{
    model::{
        api::CommandCreatedDto,
        command::{ApnConfigCommandDto, BlockCommandDto, CommandDto, ServerConfigCommandDto},
    },
    server::controller::{
        command::{
            get_commands, queue_apn_config_command, queue_block_command,
            queue_server_config_command,
        },
        util::extract::ValidatedJson,
    },
};

use super::*;

mod queue_block_command {
    use super::*;

    /// Expect a stored GTOUT row and the vehicle flagged as pending
    #[tokio::test]
    async fn stores_block_command() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .with_mock_vehicle(TEST_IMEI)
            .build()
            .await?;

        let request = BlockCommandDto {
            block: Some(true),
            tracker_model: Some("GV50".to_string()),
            password: Some("gv50".to_string()),
        };

        let resp = queue_block_command(
            State(app_state(&test)),
            Path(TEST_IMEI.to_string()),
            ValidatedJson(request),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let created: CommandCreatedDto = body_json(resp).await;
        assert!(created.success);

        let command = entity::prelude::Command::find_by_id(created.command_id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(command.command_type, entity::command::CommandType::Gtout);
        assert_eq!(command.command_data, "AT+GTOUT=gv50,1,,,,,,0,,,,,,,0001$");
        assert_eq!(command.parameters.as_ref().unwrap()["action"], "block");
        assert_eq!(command.max_retries, 3);
        assert_eq!(command.timeout_seconds, 30);

        let vehicle = entity::prelude::Vehicle::find_by_id(1).one(&test.db).await?.unwrap();
        assert!(vehicle.block_command_pending);

        Ok(())
    }

    /// Expect the command to be stored even when no vehicle has the IMEI
    #[tokio::test]
    async fn stores_unblock_for_unknown_vehicle() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;

        let request = BlockCommandDto {
            block: Some(false),
            tracker_model: Some("GMT200".to_string()),
            password: None,
        };

        let resp = queue_block_command(
            State(app_state(&test)),
            Path(TEST_IMEI.to_string()),
            ValidatedJson(request),
        )
        .await
        .unwrap()
        .into_response();

        let created: CommandCreatedDto = body_json(resp).await;
        let command = entity::prelude::Command::find_by_id(created.command_id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(command.command_data, "AT+GTOUT=,0,0,0,0,,,,,,,,,,0000$");
        assert_eq!(command.parameters.as_ref().unwrap()["action"], "unblock");

        Ok(())
    }
}

mod queue_server_config_command {
    use super::*;

    #[tokio::test]
    async fn stores_gtsri_command() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;

        let request = ServerConfigCommandDto {
            server_ip: Some("203.0.113.10".to_string()),
            server_port: Some(8000),
            password: Some("gv50".to_string()),
        };

        let resp = queue_server_config_command(
            State(app_state(&test)),
            Path(TEST_IMEI.to_string()),
            ValidatedJson(request),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let created: CommandCreatedDto = body_json(resp).await;
        let command = entity::prelude::Command::find_by_id(created.command_id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(command.command_type, entity::command::CommandType::Gtsri);
        assert_eq!(command.command_data, "AT+GTSRI=gv50,203.0.113.10,8000,,,0001$");
        assert_eq!(command.parameters.as_ref().unwrap()["serverPort"], 8000);

        Ok(())
    }
}

mod queue_apn_config_command {
    use super::*;

    /// Expect the APN password in the command string but not in the stored parameters
    #[tokio::test]
    async fn stores_gtbsi_command() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;

        let request = ApnConfigCommandDto {
            apn_name: Some("internet.carrier".to_string()),
            apn_username: Some("user".to_string()),
            apn_password: Some("apnpw".to_string()),
            password: Some("gv50".to_string()),
        };

        let resp = queue_apn_config_command(
            State(app_state(&test)),
            Path(TEST_IMEI.to_string()),
            ValidatedJson(request),
        )
        .await
        .unwrap()
        .into_response();

        let created: CommandCreatedDto = body_json(resp).await;
        let command = entity::prelude::Command::find_by_id(created.command_id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(command.command_type, entity::command::CommandType::Gtbsi);
        assert_eq!(
            command.command_data,
            "AT+GTBSI=gv50,internet.carrier,user,apnpw,,,0001$"
        );
        assert_eq!(command.parameters.as_ref().unwrap()["action"], "apn_config");
        assert!(command.parameters.as_ref().unwrap().get("apnPassword").is_none());

        Ok(())
    }
}

mod get_commands {
    use super::*;

    /// Expect queued commands of the tracker only, newest first
    #[tokio::test]
    async fn lists_commands_newest_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tracker_tables().build().await?;
        let state = app_state(&test);

        for block in [true, false] {
            queue_block_command(
                State(state.clone()),
                Path(TEST_IMEI.to_string()),
                ValidatedJson(BlockCommandDto {
                    block: Some(block),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();
        }
        queue_block_command(
            State(state.clone()),
            Path("864696060000002".to_string()),
            ValidatedJson(BlockCommandDto {
                block: Some(true),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        let resp = get_commands(State(state), Path(TEST_IMEI.to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let commands: Vec<CommandDto> = body_json(resp).await;
        assert_eq!(commands.len(), 2);
        assert!(commands.iter().all(|c| c.imei == TEST_IMEI));
        assert_eq!(commands[0].action(), "unblock");

        Ok(())
    }
}
