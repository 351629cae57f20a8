//! Application state shared across handlers

use crate::db::Database;

/// Shared application state.
///
/// Holds the process-wide database handle. Cloning shares the same handle.
#[derive(Clone, Debug)]
pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}
