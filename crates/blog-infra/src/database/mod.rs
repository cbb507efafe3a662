//! Database connection management and the PostgreSQL repository.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::DatabasePool;
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;
