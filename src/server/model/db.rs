//! Database model type aliases and DTO conversions.
//!
//! Aliases keep signatures short across the data and service layers; the `From` implementations
//! map entity models onto the camelCase DTOs returned by the API.

use crate::model::{
    command::{CommandDto, CommandStatus, CommandType},
    configuration::DeviceConfigurationDto,
    message::MessageDto,
    vehicle::{VehicleDataDto, VehicleDto, VehicleStatus},
};

/// Type alias for the vehicle database model.
///
/// One row per tracker, keyed by the unique IMEI.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for the telemetry sample database model.
pub type VehicleDataModel = entity::vehicle_data::Model;

/// Type alias for the queued command database model.
pub type CommandModel = entity::command::Model;

/// Type alias for the desired device configuration database model.
///
/// At most one row per IMEI.
pub type DeviceConfigurationModel = entity::device_configuration::Model;

/// Type alias for the owner message database model.
pub type MessageModel = entity::message::Model;

impl From<entity::vehicle::VehicleStatus> for VehicleStatus {
    fn from(status: entity::vehicle::VehicleStatus) -> Self {
        match status {
            entity::vehicle::VehicleStatus::Online => VehicleStatus::Online,
            entity::vehicle::VehicleStatus::Offline => VehicleStatus::Offline,
            entity::vehicle::VehicleStatus::Blocked => VehicleStatus::Blocked,
        }
    }
}

impl From<entity::command::CommandType> for CommandType {
    fn from(command_type: entity::command::CommandType) -> Self {
        match command_type {
            entity::command::CommandType::Gtout => CommandType::Gtout,
            entity::command::CommandType::Gtsri => CommandType::Gtsri,
            entity::command::CommandType::Gtbsi => CommandType::Gtbsi,
        }
    }
}

impl From<entity::command::CommandStatus> for CommandStatus {
    fn from(status: entity::command::CommandStatus) -> Self {
        match status {
            entity::command::CommandStatus::Pending => CommandStatus::Pending,
            entity::command::CommandStatus::Sent => CommandStatus::Sent,
            entity::command::CommandStatus::Acknowledged => CommandStatus::Acknowledged,
            entity::command::CommandStatus::Failed => CommandStatus::Failed,
        }
    }
}

impl From<VehicleModel> for VehicleDto {
    fn from(v: VehicleModel) -> Self {
        Self {
            id: v.id,
            imei: v.imei,
            cpf: v.cpf,
            plate: v.plate,
            ignition: v.ignition,
            blocked: v.blocked,
            block_command_pending: v.block_command_pending,
            block_warning_sent: v.block_warning_sent,
            tracker_model: v.tracker_model,
            tracker_password: v.tracker_password,
            status: v.status.into(),
            last_seen: v.last_seen,
            created_at: v.created_at,
        }
    }
}

impl From<VehicleDataModel> for VehicleDataDto {
    fn from(d: VehicleDataModel) -> Self {
        Self {
            id: d.id,
            imei: d.imei,
            longitude: d.longitude,
            latitude: d.latitude,
            altitude: d.altitude,
            speed: d.speed,
            ignition: d.ignition,
            timestamp: d.timestamp,
            device_time: d.device_time,
            raw_data: d.raw_data,
        }
    }
}

impl From<CommandModel> for CommandDto {
    fn from(c: CommandModel) -> Self {
        Self {
            id: c.id,
            imei: c.imei,
            command_type: c.command_type.into(),
            command_data: c.command_data,
            parameters: c.parameters,
            status: c.status.into(),
            created_at: c.created_at,
            sent_at: c.sent_at,
            acknowledged_at: c.acknowledged_at,
            retry_count: c.retry_count,
            max_retries: c.max_retries,
            timeout_seconds: c.timeout_seconds,
        }
    }
}

impl From<DeviceConfigurationModel> for DeviceConfigurationDto {
    fn from(c: DeviceConfigurationModel) -> Self {
        Self {
            id: c.id,
            imei: c.imei,
            server_ip: c.server_ip,
            server_port: c.server_port,
            server_domain: c.server_domain,
            apn_name: c.apn_name,
            apn_username: c.apn_username,
            apn_password: c.apn_password,
            report_interval: c.report_interval,
            heartbeat_interval: c.heartbeat_interval,
            updated_at: c.updated_at,
            applied_at: c.applied_at,
        }
    }
}

impl From<MessageModel> for MessageDto {
    fn from(m: MessageModel) -> Self {
        Self {
            id: m.id,
            cpf: m.cpf,
            imei: m.imei,
            message_type_id: m.message_type_id,
            message: m.message,
            message_html: m.message_html,
            timestamp: m.timestamp,
            read: m.read,
        }
    }
}
