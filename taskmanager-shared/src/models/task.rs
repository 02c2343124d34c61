/// Task model and database operations
///
/// This module provides the Task model. A task cannot exist without a valid
/// owning user at creation time; the service layer verifies the owner
/// before inserting, and the foreign key constraint backstops it.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     content TEXT NOT NULL,
///     priority INTEGER NOT NULL DEFAULT 0,
///     slug VARCHAR(255) NOT NULL,
///     user_id INTEGER NOT NULL REFERENCES users(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::slug::slugify;

/// Task model representing a unit of work owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (generated by the database)
    pub id: i32,

    /// Task title
    pub title: String,

    /// Task body text
    pub content: String,

    /// Priority, higher is more urgent
    pub priority: i32,

    /// URL-safe slug derived from the title
    ///
    /// Recomputed whenever the title changes
    pub slug: String,

    /// Owning user
    pub user_id: i32,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Owning user (must exist)
    pub user_id: i32,

    /// Task title
    pub title: String,

    /// Task body text
    pub content: String,

    /// Priority
    pub priority: i32,
}

/// Input for updating a task
///
/// Full-field replace semantics; the slug is recomputed from the new title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New body text
    pub content: String,

    /// New priority
    pub priority: i32,
}

impl Task {
    /// Creates a new task for an existing user
    ///
    /// The slug is derived from the title before the insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the owning user does not exist (foreign key
    /// violation) or the database operation fails
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let slug = slugify(&data.title);

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, priority, slug, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, priority, slug, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(slug)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id,
                   created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id,
                   created_at, updated_at
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists all tasks owned by the given user
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, slug, user_id,
                   created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Updates an existing task
    ///
    /// Title, content, and priority are replaced; the slug is recomputed
    /// from the new title and `updated_at` is bumped.
    ///
    /// # Returns
    ///
    /// The updated task if found, None if the task doesn't exist
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let slug = slugify(&data.title);

        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2, content = $3, priority = $4, slug = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, priority, slug, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(slug)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if the task was deleted, false if it didn't exist
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_struct() {
        let create_task = CreateTask {
            user_id: 1,
            title: "Fix the roof".to_string(),
            content: "Before the rain comes back".to_string(),
            priority: 2,
        };

        assert_eq!(create_task.user_id, 1);
        assert_eq!(create_task.priority, 2);
    }

    #[test]
    fn test_slug_matches_title_derivation() {
        assert_eq!(slugify("Fix the roof"), "fix-the-roof");
        // Same title always yields the same slug
        assert_eq!(slugify("Fix the roof"), slugify("Fix the roof"));
    }

    // Integration tests for database operations are in tests/task_store_tests.rs
}
