//! Tracker command queueing.
//!
//! Each operation encodes the operator's request with [`crate::protocol`], stores the resulting
//! AT command as a pending row together with a parameter map describing the intent, and returns
//! the stored command. Delivery to the device is not part of this service.

use dioxus_logger::tracing;
use sea_orm::ActiveEnum;
use serde_json::json;

use crate::{
    model::command::{ApnConfigCommandDto, BlockCommandDto, CommandDto, ServerConfigCommandDto},
    protocol::{self, TrackerModel},
    server::{
        config::CommandSettings,
        data::{NewCommand, TrackerStore},
        error::Error,
        service::required,
    },
};

/// Model name recorded in the parameters when the request omits one.
static DEFAULT_TRACKER_MODEL: &str = "GV50";

/// Service for encoding and storing tracker commands.
pub struct CommandService<'a> {
    store: &'a dyn TrackerStore,
    settings: CommandSettings,
}

impl<'a> CommandService<'a> {
    /// Creates a new instance of [`CommandService`].
    ///
    /// # Arguments
    /// - `store` - Storage capability the commands are written to
    /// - `settings` - Retry limit and timeout recorded on every new command
    pub fn new(store: &'a dyn TrackerStore, settings: CommandSettings) -> Self {
        Self { store, settings }
    }

    /// Lists the commands of a tracker, most recent first.
    pub async fn list_commands(&self, imei: &str) -> Result<Vec<CommandDto>, Error> {
        let commands = self.store.list_commands(imei).await?;

        Ok(commands.into_iter().map(CommandDto::from).collect())
    }

    /// Queues a `GTOUT` block or unblock command.
    ///
    /// The vehicle, when registered, is flagged with `block_command_pending` in the same write as
    /// the command row. Commands for unregistered IMEIs are stored all the same.
    ///
    /// # Returns
    /// - `Ok(CommandDto)` - The stored pending command
    /// - `Err(Error::ValidationError)` - `block` is missing
    /// - `Err(Error::DbErr)` - Storage failure
    pub async fn queue_block(
        &self,
        imei: &str,
        request: BlockCommandDto,
    ) -> Result<CommandDto, Error> {
        let block = required(request.block, "block")?;
        let model_name = request
            .tracker_model
            .unwrap_or_else(|| DEFAULT_TRACKER_MODEL.to_string());
        let password = request.password.unwrap_or_default();

        warn_on_framing_chars(imei, "password", &password);

        let command_data =
            protocol::encode_block(block, TrackerModel::from_name(&model_name), &password);
        let action = if block { "block" } else { "unblock" };
        let parameters = json!({
            "block": block,
            "trackerModel": model_name,
            "action": action,
        });

        let new_command = self.new_command(
            imei,
            entity::command::CommandType::Gtout,
            command_data,
            parameters,
        );
        let (command, vehicle) = self.store.queue_block_command(new_command).await?;

        if vehicle.is_none() {
            tracing::debug!(imei = %imei, "Block command queued for unregistered tracker");
        }
        log_queued(&command);

        Ok(command.into())
    }

    /// Queues a `GTSRI` command pointing the tracker at a new server endpoint.
    pub async fn queue_server_config(
        &self,
        imei: &str,
        request: ServerConfigCommandDto,
    ) -> Result<CommandDto, Error> {
        let server_ip = required(request.server_ip, "serverIp")?;
        let server_port = required(request.server_port, "serverPort")?;
        let password = request.password.unwrap_or_default();

        warn_on_framing_chars(imei, "serverIp", &server_ip);
        warn_on_framing_chars(imei, "password", &password);

        let command_data = protocol::encode_server_config(&server_ip, server_port, &password);
        let parameters = json!({
            "serverIp": server_ip,
            "serverPort": server_port,
            "action": "server_config",
        });

        self.store_command(imei, entity::command::CommandType::Gtsri, command_data, parameters)
            .await
    }

    /// Queues a `GTBSI` command with new APN settings.
    ///
    /// The APN password is encoded into the command but not copied into the parameter map.
    pub async fn queue_apn_config(
        &self,
        imei: &str,
        request: ApnConfigCommandDto,
    ) -> Result<CommandDto, Error> {
        let apn_name = required(request.apn_name, "apnName")?;
        let apn_username = request.apn_username;
        let apn_password = request.apn_password.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        warn_on_framing_chars(imei, "apnName", &apn_name);
        warn_on_framing_chars(imei, "apnUsername", apn_username.as_deref().unwrap_or_default());
        warn_on_framing_chars(imei, "apnPassword", &apn_password);
        warn_on_framing_chars(imei, "password", &password);

        let command_data = protocol::encode_apn_config(
            &apn_name,
            apn_username.as_deref().unwrap_or_default(),
            &apn_password,
            &password,
        );
        let parameters = json!({
            "apnName": apn_name,
            "apnUsername": apn_username,
            "action": "apn_config",
        });

        self.store_command(imei, entity::command::CommandType::Gtbsi, command_data, parameters)
            .await
    }

    async fn store_command(
        &self,
        imei: &str,
        command_type: entity::command::CommandType,
        command_data: String,
        parameters: serde_json::Value,
    ) -> Result<CommandDto, Error> {
        let new_command = self.new_command(imei, command_type, command_data, parameters);
        let command = self.store.create_command(new_command).await?;

        log_queued(&command);

        Ok(command.into())
    }

    fn new_command(
        &self,
        imei: &str,
        command_type: entity::command::CommandType,
        command_data: String,
        parameters: serde_json::Value,
    ) -> NewCommand {
        NewCommand {
            imei: imei.to_string(),
            command_type,
            command_data,
            parameters,
            max_retries: self.settings.max_retries,
            timeout_seconds: self.settings.timeout_seconds,
        }
    }
}

fn log_queued(command: &entity::command::Model) {
    tracing::info!(
        imei = %command.imei,
        command_id = command.id,
        "Queued {} command",
        command.command_type.to_value()
    );
}

/// The device mis-frames values containing `,` or `$`; they are still sent verbatim.
fn warn_on_framing_chars(imei: &str, field: &str, value: &str) {
    if protocol::has_framing_chars(value) {
        tracing::warn!(
            imei = %imei,
            field = field,
            "Command field contains AT-command framing characters and will be sent unescaped"
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::server::data::MockTrackerStore;

    fn stored(command: NewCommand) -> entity::command::Model {
        entity::command::Model {
            id: 7,
            imei: command.imei,
            command_type: command.command_type,
            command_data: command.command_data,
            parameters: Some(command.parameters),
            status: entity::command::CommandStatus::Pending,
            created_at: Utc::now().naive_utc(),
            sent_at: None,
            acknowledged_at: None,
            retry_count: 0,
            max_retries: command.max_retries,
            timeout_seconds: command.timeout_seconds,
        }
    }

    mod queue_block {
        use super::*;

        /// Expect an encoded GTOUT row and the vehicle flag in a single store write
        #[tokio::test]
        async fn stores_gtout_and_flags_vehicle() {
            let mut store = MockTrackerStore::new();
            store
                .expect_queue_block_command()
                .withf(|command| {
                    command.imei == "864696060000001"
                        && command.command_type == entity::command::CommandType::Gtout
                        && command.command_data == "AT+GTOUT=gv50,1,,,,,,0,,,,,,,0001$"
                        && command.parameters
                            == json!({ "block": true, "trackerModel": "GV50", "action": "block" })
                })
                .times(1)
                .returning(|command| Ok((stored(command), None)));
            store.expect_create_command().never();

            let service = CommandService::new(&store, CommandSettings::default());
            let result = service
                .queue_block(
                    "864696060000001",
                    BlockCommandDto {
                        block: Some(true),
                        tracker_model: Some("GV50".to_string()),
                        password: Some("gv50".to_string()),
                    },
                )
                .await;

            let command = result.unwrap();
            assert_eq!(command.id, 7);
            assert_eq!(command.action(), "block");
        }

        /// Expect an omitted model to encode and record as GV50
        #[tokio::test]
        async fn defaults_to_gv50() {
            let mut store = MockTrackerStore::new();
            store
                .expect_queue_block_command()
                .withf(|command| {
                    command.command_data == "AT+GTOUT=,0,,,,,,0,,,,,,,0000$"
                        && command.parameters["trackerModel"] == "GV50"
                        && command.parameters["action"] == "unblock"
                })
                .returning(|command| Ok((stored(command), None)));

            let service = CommandService::new(&store, CommandSettings::default());
            let result = service
                .queue_block(
                    "864696060000001",
                    BlockCommandDto {
                        block: Some(false),
                        ..Default::default()
                    },
                )
                .await;

            assert!(result.is_ok());
        }

        /// Expect a failed vehicle flag to surface as a storage error with no separate command write
        #[tokio::test]
        async fn fails_without_storing_when_flag_fails() {
            let mut store = MockTrackerStore::new();
            store
                .expect_queue_block_command()
                .times(1)
                .returning(|_| Err(sea_orm::DbErr::Custom("vehicle update failed".to_string())));
            store.expect_create_command().never();

            let service = CommandService::new(&store, CommandSettings::default());
            let result = service
                .queue_block(
                    "864696060000001",
                    BlockCommandDto {
                        block: Some(true),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(result, Err(Error::DbErr(_))));
        }

        /// Expect a missing `block` to be rejected without storing anything
        #[tokio::test]
        async fn rejects_missing_block() {
            let store = MockTrackerStore::new();

            let service = CommandService::new(&store, CommandSettings::default());
            let result = service
                .queue_block("864696060000001", BlockCommandDto::default())
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));
        }
    }

    mod queue_server_config {
        use super::*;

        /// Expect configured delivery limits to be recorded on the row
        #[tokio::test]
        async fn records_command_settings() {
            let mut store = MockTrackerStore::new();
            store
                .expect_create_command()
                .withf(|command| {
                    command.command_type == entity::command::CommandType::Gtsri
                        && command.command_data == "AT+GTSRI=pw,203.0.113.10,8000,,,0001$"
                        && command.parameters["action"] == "server_config"
                        && command.max_retries == 5
                        && command.timeout_seconds == 60
                })
                .times(1)
                .returning(|command| Ok(stored(command)));

            let settings = CommandSettings {
                max_retries: 5,
                timeout_seconds: 60,
            };
            let service = CommandService::new(&store, settings);
            let result = service
                .queue_server_config(
                    "864696060000001",
                    ServerConfigCommandDto {
                        server_ip: Some("203.0.113.10".to_string()),
                        server_port: Some(8000),
                        password: Some("pw".to_string()),
                    },
                )
                .await;

            let command = result.unwrap();
            assert_eq!(command.max_retries, 5);
            assert_eq!(command.timeout_seconds, 60);
        }
    }

    mod queue_apn_config {
        use super::*;

        /// Expect the APN password in the command string but not in the parameters
        #[tokio::test]
        async fn omits_apn_password_from_parameters() {
            let mut store = MockTrackerStore::new();
            store
                .expect_create_command()
                .withf(|command| {
                    command.command_data == "AT+GTBSI=devpw,internet.carrier,user,secret,,,0001$"
                        && command.parameters.get("apnPassword").is_none()
                        && command.parameters["apnUsername"] == "user"
                        && command.parameters["action"] == "apn_config"
                })
                .times(1)
                .returning(|command| Ok(stored(command)));

            let service = CommandService::new(&store, CommandSettings::default());
            let result = service
                .queue_apn_config(
                    "864696060000001",
                    ApnConfigCommandDto {
                        apn_name: Some("internet.carrier".to_string()),
                        apn_username: Some("user".to_string()),
                        apn_password: Some("secret".to_string()),
                        password: Some("devpw".to_string()),
                    },
                )
                .await;

            assert!(result.is_ok());
        }

        /// Expect framing characters to be encoded verbatim
        #[tokio::test]
        async fn encodes_framing_chars_unchanged() {
            let mut store = MockTrackerStore::new();
            store
                .expect_create_command()
                .withf(|command| command.command_data == "AT+GTBSI=a$b,apn,,,,,0001$")
                .times(1)
                .returning(|command| Ok(stored(command)));

            let service = CommandService::new(&store, CommandSettings::default());
            let result = service
                .queue_apn_config(
                    "864696060000001",
                    ApnConfigCommandDto {
                        apn_name: Some("apn".to_string()),
                        password: Some("a$b".to_string()),
                        ..Default::default()
                    },
                )
                .await;

            assert!(result.is_ok());
        }
    }
}
