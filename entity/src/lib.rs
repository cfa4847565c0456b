//! SeaORM entities for the tracker dashboard schema.

pub mod prelude;

pub mod command;
pub mod device_configuration;
pub mod message;
pub mod vehicle;
pub mod vehicle_data;
