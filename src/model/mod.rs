//! Data transfer objects shared between the server API and the dashboard client.

pub mod api;
pub mod command;
pub mod configuration;
pub mod message;
pub mod vehicle;
