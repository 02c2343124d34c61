/// Schema bootstrap
///
/// This module applies the idempotent DDL for the two TaskManager tables at
/// startup. There is no versioned migration history; each statement is a
/// `CREATE ... IF NOT EXISTS` and re-running the bootstrap against an
/// already-initialized database is a no-op.
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
///
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
///
/// The foreign key deliberately carries no `ON DELETE CASCADE`: removing a
/// user deletes its tasks explicitly inside one transaction (see
/// `User::delete_with_tasks`), so the cascade is visible in application
/// code rather than hidden in the schema.

use sqlx::PgPool;
use tracing::info;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR(64) NOT NULL UNIQUE,
    firstname VARCHAR(64) NOT NULL,
    lastname VARCHAR(64) NOT NULL,
    age INTEGER NOT NULL,
    slug VARCHAR(64) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_TASKS: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    content TEXT NOT NULL,
    priority INTEGER NOT NULL DEFAULT 0,
    slug VARCHAR(255) NOT NULL,
    user_id INTEGER NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_TASKS_USER_ID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS tasks_user_id_idx ON tasks (user_id)";

/// Applies the TaskManager schema to the given database
///
/// Safe to call on every startup; existing tables are left untouched.
///
/// # Errors
///
/// Returns an error if any DDL statement fails or the database connection
/// is lost.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Applying database schema");

    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_TASKS).execute(pool).await?;
    sqlx::query(CREATE_TASKS_USER_ID_INDEX).execute(pool).await?;

    info!("Database schema is up to date");
    Ok(())
}
