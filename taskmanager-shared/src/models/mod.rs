/// Database models for TaskManager
///
/// This module contains the two record types and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts that own tasks
/// - `task`: Task records scoped to an owning user
///
/// # Example
///
/// ```no_run
/// use taskmanager_shared::models::user::{CreateUser, User};
/// use taskmanager_shared::db::pool::{create_pool, PoolConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(PoolConfig::default()).await?;
///
/// let new_user = CreateUser {
///     username: "alice".to_string(),
///     firstname: "Alice".to_string(),
///     lastname: "Lidell".to_string(),
///     age: 27,
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
