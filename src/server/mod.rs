//! Server application core modules.
//!
//! This module contains all server-side functionality for the tracker dashboard: HTTP routing,
//! request validation, the storage abstraction over the relational schema, and the services that
//! encode and queue tracker commands. Nothing in this service delivers queued commands to the
//! trackers.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
