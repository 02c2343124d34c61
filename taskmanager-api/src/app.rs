/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskmanager_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskmanager_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                        # Welcome message (public)
/// ├── GET  /health                  # Health check (public)
/// ├── /task/
/// │   ├── GET    /                  # List tasks
/// │   ├── GET    /:task_id          # Fetch task
/// │   ├── POST   /create?user_id=   # Create task for a user
/// │   ├── PUT    /update/:task_id   # Replace task fields
/// │   └── DELETE /delete/:task_id   # Remove task
/// └── /user/
///     ├── GET    /                  # List users
///     ├── GET    /:user_id          # Fetch user
///     ├── POST   /create            # Create user
///     ├── GET    /:user_id/tasks    # List a user's tasks
///     ├── PUT    /update/:user_id   # Replace user fields
///     └── DELETE /delete_users?user_id=  # Delete user and cascade tasks
/// ```
///
/// Exactly one handler is bound per logical operation.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Root routes (public)
    let root_routes = Router::new()
        .route("/", get(routes::health::welcome))
        .route("/health", get(routes::health::health_check));

    let task_routes = Router::new()
        .route("/", get(routes::task::list_tasks))
        .route("/create", post(routes::task::create_task))
        .route("/update/:task_id", put(routes::task::update_task))
        .route("/delete/:task_id", delete(routes::task::delete_task))
        .route("/:task_id", get(routes::task::get_task));

    let user_routes = Router::new()
        .route("/", get(routes::user::list_users))
        .route("/create", post(routes::user::create_user))
        .route("/delete_users", delete(routes::user::delete_user))
        .route("/update/:user_id", put(routes::user::update_user))
        .route("/:user_id", get(routes::user::get_user))
        .route("/:user_id/tasks", get(routes::user::tasks_for_user));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(root_routes)
        .nest("/task", task_routes)
        .nest("/user", user_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
