//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::db::Database;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Reporting database handle, opened at startup and closed on shutdown
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
