use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// Holds the database connection pool; each operation borrows it for its own duration.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
