//! Shared gateway state.

use crate::db::Database;

/// State handed to every handler.
pub struct AppState {
    pub db: Database,
}
