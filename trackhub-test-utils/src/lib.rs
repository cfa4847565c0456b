//! Test harness for the tracker dashboard.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, then `build()` returns a [`TestContext`] holding an in-memory SQLite database with
//! everything inserted.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::tracker::factory, TestBuilder, TestContext, TestError};
}
