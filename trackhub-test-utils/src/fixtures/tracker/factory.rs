//! Active models populated with test values, ready to insert.

use chrono::{Duration, NaiveDateTime, Utc};
use entity::vehicle::VehicleStatus;
use sea_orm::ActiveValue;

/// Owner CPF assigned to fixture vehicles
pub const TEST_CPF: &str = "12345678900";
/// Tracker model assigned to fixture vehicles
pub const TEST_TRACKER_MODEL: &str = "GV50";
/// Device password assigned to fixture vehicles
pub const TEST_TRACKER_PASSWORD: &str = "gv50";

/// An online, unblocked GV50 vehicle with the given IMEI.
pub fn mock_vehicle(imei: &str) -> entity::vehicle::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::vehicle::ActiveModel {
        imei: ActiveValue::Set(imei.to_string()),
        cpf: ActiveValue::Set(Some(TEST_CPF.to_string())),
        plate: ActiveValue::Set(None),
        ignition: ActiveValue::Set(Some(false)),
        blocked: ActiveValue::Set(false),
        block_command_pending: ActiveValue::Set(false),
        block_warning_sent: ActiveValue::Set(false),
        tracker_model: ActiveValue::Set(Some(TEST_TRACKER_MODEL.to_string())),
        tracker_password: ActiveValue::Set(Some(TEST_TRACKER_PASSWORD.to_string())),
        status: ActiveValue::Set(VehicleStatus::Online),
        last_seen: ActiveValue::Set(Some(now)),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Telemetry sample number `index`, received `index` seconds after `base`.
pub fn mock_telemetry(
    imei: &str,
    index: usize,
    base: NaiveDateTime,
) -> entity::vehicle_data::ActiveModel {
    let timestamp = base + Duration::seconds(index as i64);

    entity::vehicle_data::ActiveModel {
        imei: ActiveValue::Set(imei.to_string()),
        longitude: ActiveValue::Set(Some(format!("-46.63{:02}", index % 100))),
        latitude: ActiveValue::Set(Some(format!("-23.55{:02}", index % 100))),
        altitude: ActiveValue::Set(Some("760".to_string())),
        speed: ActiveValue::Set(Some(format!("{}", index * 5))),
        ignition: ActiveValue::Set(Some(index % 2 == 0)),
        timestamp: ActiveValue::Set(timestamp),
        device_time: ActiveValue::Set(Some(timestamp.format("%Y%m%d%H%M%S").to_string())),
        raw_data: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Unread text message number `index` addressed to the owner `cpf`.
pub fn mock_message(cpf: &str, index: usize, base: NaiveDateTime) -> entity::message::ActiveModel {
    entity::message::ActiveModel {
        cpf: ActiveValue::Set(Some(cpf.to_string())),
        imei: ActiveValue::Set(None),
        message_type_id: ActiveValue::Set(1),
        message: ActiveValue::Set(format!("Test message {}", index)),
        message_html: ActiveValue::Set(None),
        timestamp: ActiveValue::Set(base + Duration::seconds(index as i64)),
        read: ActiveValue::Set(false),
        ..Default::default()
    }
}

/// A desired configuration that has never been applied.
pub fn mock_configuration(imei: &str) -> entity::device_configuration::ActiveModel {
    entity::device_configuration::ActiveModel {
        imei: ActiveValue::Set(imei.to_string()),
        server_ip: ActiveValue::Set(Some("203.0.113.10".to_string())),
        server_port: ActiveValue::Set(Some(8000)),
        server_domain: ActiveValue::Set(None),
        apn_name: ActiveValue::Set(Some("internet.carrier".to_string())),
        apn_username: ActiveValue::Set(None),
        apn_password: ActiveValue::Set(None),
        report_interval: ActiveValue::Set(Some(60)),
        heartbeat_interval: ActiveValue::Set(Some(300)),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        applied_at: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Fixed point in the past that fixture timelines start from
pub fn base_time() -> NaiveDateTime {
    Utc::now().naive_utc() - Duration::hours(1)
}
