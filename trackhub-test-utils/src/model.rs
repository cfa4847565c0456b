//! Database model type aliases matching those used by the main crate.

pub type VehicleModel = entity::vehicle::Model;
pub type VehicleDataModel = entity::vehicle_data::Model;
pub type DeviceConfigurationModel = entity::device_configuration::Model;
pub type MessageModel = entity::message::Model;
