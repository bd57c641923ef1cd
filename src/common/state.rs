// Application state shared across all modules

use sqlx::SqlitePool;

/// Application state handed to every handler through an `Extension`
///
/// The pool is the only shared resource; services borrow a clone per request.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}
