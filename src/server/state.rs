//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. Every field is cheap to clone: the database connection is
//! a pool, the hub shares its map behind an `Arc` and the configuration is reference counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, realtime::hub::Hub};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Registry of live websocket connections used for realtime pushes.
    pub hub: Hub,

    /// Settings loaded from the environment at startup.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, hub: Hub, config: Config) -> Self {
        Self {
            db,
            hub,
            config: Arc::new(config),
        }
    }
}
