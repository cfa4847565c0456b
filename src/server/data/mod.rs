//! Data access layer repositories.
//!
//! This module contains the database repository implementations for the tracker tables, one
//! repository per table, and the [`TrackerStore`] capability that services depend on. Handlers
//! and services never touch SeaORM directly; [`DbTrackerStore`] delegates each operation to the
//! matching repository.

pub mod command;
pub mod device_configuration;
pub mod message;
pub mod store;
pub mod vehicle;
pub mod vehicle_data;

pub use command::NewCommand;
pub use device_configuration::DesiredConfiguration;
pub use store::{DbTrackerStore, TrackerStore};

#[cfg(test)]
pub use store::MockTrackerStore;
