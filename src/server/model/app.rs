use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::CommandSettings,
    data::{DbTrackerStore, TrackerStore},
};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Storage capability used by all services.
    pub store: Arc<dyn TrackerStore>,
    /// Delivery limits recorded on queued commands.
    pub command_settings: CommandSettings,
}

impl AppState {
    /// Creates state backed by the given store.
    pub fn new(store: Arc<dyn TrackerStore>, command_settings: CommandSettings) -> Self {
        Self {
            store,
            command_settings,
        }
    }
}

/// Builds state over a database connection with default command settings.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(DbTrackerStore::new(db)),
            CommandSettings::default(),
        )
    }
}
