#![allow(non_snake_case)]

mod client;

use trackhub::{model, protocol};

#[cfg(feature = "server")]
use trackhub::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, data::DbTrackerStore, model::app::AppState, startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = match startup::connect_to_database(&config).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("Database error: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(
            max_retries = config.command.max_retries,
            timeout_seconds = config.command.timeout_seconds,
            "Starting server"
        );

        let state = AppState::new(Arc::new(DbTrackerStore::new(db)), config.command);

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
