/// Welcome and health check endpoints
///
/// # Endpoints
///
/// - `GET /` - Welcome message
/// - `GET /health` - Service health including database connectivity
///
/// # Health Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected",
///   "pool": {
///     "active_connections": 1,
///     "idle_connections": 4,
///     "total_connections": 5
///   }
/// }
/// ```

use crate::app::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskmanager_shared::db::pool;

/// Welcome response
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Greeting message
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("healthy" or "degraded")
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status ("connected" or "unreachable")
    pub database: String,

    /// Connection pool statistics
    pub pool: PoolStatsResponse,
}

/// Connection pool statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct PoolStatsResponse {
    /// Connections currently in use
    pub active_connections: usize,

    /// Idle connections available
    pub idle_connections: usize,

    /// Total connections in the pool
    pub total_connections: usize,
}

/// Welcome handler
///
/// Returns the service greeting.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to TaskManager".to_string(),
    })
}

/// Health check handler
///
/// Probes the database and reports pool statistics. Responds 200 when the
/// database is reachable, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let stats = pool::get_pool_stats(&state.db);
    let pool_stats = PoolStatsResponse {
        active_connections: stats.active_connections,
        idle_connections: stats.idle_connections,
        total_connections: stats.total_connections,
    };

    match pool::health_check(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                database: "connected".to_string(),
                pool: pool_stats,
            }),
        ),
        Err(err) => {
            tracing::warn!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    database: "unreachable".to_string(),
                    pool: pool_stats,
                }),
            )
        }
    }
}
