//! # TaskManager Shared Library
//!
//! This crate contains the persistence layer shared by the TaskManager
//! HTTP API: the database connection pool, schema bootstrap, slug
//! derivation, and the User/Task record stores.
//!
//! ## Module Organization
//!
//! - `db`: Connection pooling and schema bootstrap
//! - `models`: Database models and their CRUD operations
//! - `slug`: URL-safe slug derivation

pub mod db;
pub mod models;
pub mod slug;

/// Current version of the TaskManager shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
