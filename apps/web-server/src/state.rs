//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_core::services::PostStore;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DatabasePool, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    #[cfg(feature = "postgres")]
    pub db: Option<DatabasePool>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabasePool::init(config).await {
                    Ok(pool) => {
                        let repo = Arc::new(PostgresPostRepository::new(pool.conn()));
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            posts: PostStore::new(repo),
                            db: Some(pool),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored - built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
        }

        tracing::info!("Application state initialized (in-memory)");
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// State over an explicit repository, without a database pool.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostStore::new(repo),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}
