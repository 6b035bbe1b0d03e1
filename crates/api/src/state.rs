use std::sync::Arc;

use crate::config::ServerConfig;
use crate::repositories::{InMemoryUserRepo, UserRepository};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// User persistence collaborator.
    pub users: Arc<dyn UserRepository>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by an empty in-memory user store.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            config: Arc::new(config),
        }
    }
}
