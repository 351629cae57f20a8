//! Database handle management
//!
//! Uses a sqlx PgPool as the single process-wide handle.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use super::DbCredentials;

/// Default maximum connections behind the handle.
/// Kept low; the only query today is the startup diagnostic.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Query run once at startup to confirm connectivity
pub const DIAGNOSTIC_QUERY: &str = "select version()";

/// Open database handle. Clones share the same underlying pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a handle using `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if the first connection cannot be established.
    pub async fn connect(credentials: &DbCredentials) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(credentials.connect_options())
            .await?;
        Ok(Self { pool })
    }

    /// Create a handle without connecting; connections open on first use.
    pub fn connect_lazy(credentials: &DbCredentials) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_lazy_with(credentials.connect_options());
        Self { pool }
    }

    /// Open a handle and run the diagnostic query.
    ///
    /// Prints `version=<server version>` to stdout on success.
    pub async fn connect_and_verify(credentials: &DbCredentials) -> Result<Self, sqlx::Error> {
        info!(dsn = %credentials.redacted_connection_string(), "Connecting to database");

        let db = Self::connect(credentials).await?;
        let version = db.server_version().await?;

        println!("version={}", version);
        info!(version = %version, "Database connection verified");

        Ok(db)
    }

    /// Run `select version()` and return the server version string
    pub async fn server_version(&self) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>(DIAGNOSTIC_QUERY)
            .fetch_one(&self.pool)
            .await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Release the handle, waiting for open connections to close.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database handle closed");
    }
}
