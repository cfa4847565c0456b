//! Fixtures inserted into the test database.
//!
//! - `tracker` - vehicles, telemetry samples, owner messages and device configurations

pub mod tracker;
