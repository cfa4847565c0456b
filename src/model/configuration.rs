use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Desired server and APN settings for a tracker
///
/// `applied_at` is only set once a device confirms the settings, which nothing in this service
/// does yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfigurationDto {
    pub id: i32,
    pub imei: String,
    pub server_ip: Option<String>,
    pub server_port: Option<i32>,
    pub server_domain: Option<String>,
    pub apn_name: Option<String>,
    pub apn_username: Option<String>,
    pub apn_password: Option<String>,
    pub report_interval: Option<i32>,
    pub heartbeat_interval: Option<i32>,
    pub updated_at: NaiveDateTime,
    pub applied_at: Option<NaiveDateTime>,
}

/// Request body replacing the desired configuration of a tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema, validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceConfigurationDto {
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
    pub server_domain: Option<String>,
    #[cfg_attr(
        feature = "server",
        validate(
            required(message = "apnName is required"),
            length(min = 1, message = "apnName must not be empty")
        )
    )]
    pub apn_name: Option<String>,
    pub apn_username: Option<String>,
    pub apn_password: Option<String>,
    #[cfg_attr(
        feature = "server",
        validate(range(min = 0, message = "reportInterval must not be negative"))
    )]
    pub report_interval: Option<i32>,
    #[cfg_attr(
        feature = "server",
        validate(range(min = 0, message = "heartbeatInterval must not be negative"))
    )]
    pub heartbeat_interval: Option<i32>,
}

impl From<&DeviceConfigurationDto> for UpdateDeviceConfigurationDto {
    fn from(config: &DeviceConfigurationDto) -> Self {
        Self {
            server_ip: config.server_ip.clone(),
            server_port: config.server_port,
            server_domain: config.server_domain.clone(),
            apn_name: config.apn_name.clone(),
            apn_username: config.apn_username.clone(),
            apn_password: config.apn_password.clone(),
            report_interval: config.report_interval,
            heartbeat_interval: config.heartbeat_interval,
        }
    }
}
