use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum CommandType {
    #[serde(rename = "GTOUT")]
    Gtout,
    #[serde(rename = "GTSRI")]
    Gtsri,
    #[serde(rename = "GTBSI")]
    Gtbsi,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Gtout => crate::protocol::GTOUT,
            CommandType::Gtsri => crate::protocol::GTSRI,
            CommandType::Gtbsi => crate::protocol::GTBSI,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Pending,
    Sent,
    Acknowledged,
    Failed,
}

impl CommandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandStatus::Pending => "pending",
            CommandStatus::Sent => "sent",
            CommandStatus::Acknowledged => "acknowledged",
            CommandStatus::Failed => "failed",
        }
    }
}

/// A stored tracker command
///
/// `retry_count`, `max_retries` and `timeout_seconds` are recorded when the command is queued and
/// are not updated by anything in this service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CommandDto {
    pub id: i32,
    pub imei: String,
    pub command_type: CommandType,
    pub command_data: String,
    pub parameters: Option<serde_json::Value>,
    pub status: CommandStatus,
    pub created_at: NaiveDateTime,
    pub sent_at: Option<NaiveDateTime>,
    pub acknowledged_at: Option<NaiveDateTime>,
    pub retry_count: i32,
    pub max_retries: i32,
    pub timeout_seconds: i32,
}

impl CommandDto {
    /// The `action` recorded in the parameters, falling back to the command code
    pub fn action(&self) -> String {
        self.parameters
            .as_ref()
            .and_then(|p| p.get("action"))
            .and_then(|a| a.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.command_type.as_str().to_string())
    }
}

/// Request body to queue a block or unblock command
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct BlockCommandDto {
    #[cfg_attr(feature = "server", validate(required(message = "block is required")))]
    pub block: Option<bool>,
    /// GV50, GV300 or GMT200; unknown or missing models use the GV50 layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_model: Option<String>,
    /// Device password, empty when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request body to queue a server endpoint command
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct ServerConfigCommandDto {
    #[cfg_attr(
        feature = "server",
        validate(
            required(message = "serverIp is required"),
            length(min = 1, message = "serverIp must not be empty")
        )
    )]
    pub server_ip: Option<String>,
    #[cfg_attr(
        feature = "server",
        validate(
            required(message = "serverPort is required"),
            range(min = 1, max = 65535, message = "serverPort must be between 1 and 65535")
        )
    )]
    pub server_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request body to queue an APN settings command
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct ApnConfigCommandDto {
    #[cfg_attr(
        feature = "server",
        validate(
            required(message = "apnName is required"),
            length(min = 1, message = "apnName must not be empty")
        )
    )]
    pub apn_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
