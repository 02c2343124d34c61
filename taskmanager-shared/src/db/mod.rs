/// Database layer for TaskManager
///
/// This module provides database connection pooling and schema bootstrap.
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
/// - `schema`: Idempotent DDL applied at startup
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::db::pool::{create_pool, PoolConfig};
/// use taskmanager_shared::db::schema::init_schema;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = PoolConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     init_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
