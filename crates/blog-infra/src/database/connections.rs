#[cfg(feature = "postgres")]
use std::sync::Arc;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Pooled connection to the posts database.
///
/// Connection acquisition and release follow the pool settings from
/// [`DatabaseConfig`]. Clones share one pool.
#[cfg(feature = "postgres")]
#[derive(Clone)]
pub struct DatabasePool {
    conn: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabasePool {
    /// Open the connection pool.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection pool...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// Shared handle to the pooled connection, for repositories.
    pub fn conn(&self) -> Arc<DbConn> {
        Arc::clone(&self.conn)
    }

    /// Check that the database answers.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }
}
