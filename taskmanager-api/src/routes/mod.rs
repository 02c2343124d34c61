/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Welcome and health check endpoints
/// - `task`: Task CRUD endpoints
/// - `user`: User CRUD endpoints

use serde::{Deserialize, Serialize};

pub mod health;
pub mod task;
pub mod user;

/// Acknowledgement body returned by mutating endpoints
///
/// Mirrors the HTTP status of the response so clients reading only the body
/// see the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// HTTP status code of the operation
    pub status_code: u16,

    /// Human-readable transaction message
    pub transaction: String,
}
