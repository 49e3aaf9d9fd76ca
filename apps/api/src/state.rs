use std::sync::Arc;

use crate::config::Config;
use crate::store::JobBoardStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Query layer. Postgres in production, in-memory for demo mode and tests.
    pub store: Arc<dyn JobBoardStore>,
    pub config: Config,
}
