pub use super::command::Entity as Command;
pub use super::device_configuration::Entity as DeviceConfiguration;
pub use super::message::Entity as Message;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_data::Entity as VehicleData;
