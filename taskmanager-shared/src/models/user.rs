/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing
/// user records. Users own tasks; deleting a user removes its tasks in the
/// same transaction.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     username VARCHAR(64) NOT NULL UNIQUE,
///     firstname VARCHAR(64) NOT NULL,
///     lastname VARCHAR(64) NOT NULL,
///     age INTEGER NOT NULL,
///     slug VARCHAR(64) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
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
/// let user = User::create(&pool, CreateUser {
///     username: "alice".to_string(),
///     firstname: "Alice".to_string(),
///     lastname: "Lidell".to_string(),
///     age: 27,
/// }).await?;
///
/// println!("Created user {} ({})", user.username, user.slug);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::slug::slugify;

/// User model representing a task owner
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (generated by the database)
    pub id: i32,

    /// Username, unique across all users
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,

    /// URL-safe slug derived from the username
    ///
    /// Recomputed whenever the username changes
    pub slug: String,

    /// When the user record was created
    pub created_at: DateTime<Utc>,

    /// When the user record was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// The slug is derived from the username at insert time and is not part of
/// the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Username (must be unique)
    pub username: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Age in years
    pub age: i32,
}

/// Input for updating an existing user
///
/// Updates have full-field replace semantics: every field is written, and
/// the slug is recomputed from the new username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New username
    pub username: String,

    /// New first name
    pub firstname: String,

    /// New last name
    pub lastname: String,

    /// New age
    pub age: i32,
}

impl User {
    /// Creates a new user in the database
    ///
    /// The slug is derived from the username before the insert.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The username already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let slug = slugify(&data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, firstname, lastname, age, slug,
                      created_at, updated_at
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by username
    ///
    /// Used for the duplicate check before insert.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug,
                   created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, lastname, age, slug,
                   created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Updates an existing user
    ///
    /// All fields are replaced, the slug is recomputed from the new
    /// username, and `updated_at` is bumped.
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The new username already exists for another user
    /// - Database connection fails
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let slug = slugify(&data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, firstname = $3, lastname = $4, age = $5,
                slug = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, firstname, lastname, age, slug,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.lastname)
        .bind(data.age)
        .bind(slug)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user and all of its tasks in one transaction
    ///
    /// Tasks are removed first, then the user row; if the user row does not
    /// exist the transaction is rolled back so nothing is persisted.
    ///
    /// # Returns
    ///
    /// The number of tasks removed alongside the user, or None if the user
    /// didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or if either delete fails
    pub async fn delete_with_tasks(pool: &PgPool, id: i32) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tasks_removed = sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let users_removed = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if users_removed == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;

        Ok(Some(tasks_removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            username: "alice".to_string(),
            firstname: "Alice".to_string(),
            lastname: "Lidell".to_string(),
            age: 27,
        };

        assert_eq!(create_user.username, "alice");
        assert_eq!(create_user.age, 27);
    }

    #[test]
    fn test_slug_matches_username_derivation() {
        // Slug persisted at create time must equal the canonical derivation
        assert_eq!(slugify("Alice"), "alice");
        assert_eq!(slugify("Mad Hatter"), "mad-hatter");
    }

    // Integration tests for database operations are in tests/user_store_tests.rs
}
