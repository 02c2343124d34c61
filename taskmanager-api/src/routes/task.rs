/// Task CRUD endpoints
///
/// # Endpoints
///
/// - `GET /task/` - List all tasks
/// - `GET /task/:task_id` - Fetch one task
/// - `POST /task/create?user_id=` - Create a task for a user
/// - `PUT /task/update/:task_id` - Replace task fields
/// - `DELETE /task/delete/:task_id` - Remove a task
///
/// Mutating endpoints respond with a `TransactionResponse` acknowledgement;
/// reads return the task entity or collection.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::TransactionResponse,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskmanager_shared::models::{
    task::{CreateTask, Task, UpdateTask},
    user::User,
};
use validator::Validate;

/// Create/update task payload
///
/// Full-field replace semantics: the same shape is used for create and
/// update, and every field is written on update.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskPayload {
    /// Task title (slug source)
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Task body text
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    /// Priority, 0-100
    #[validate(range(min = 0, max = 100, message = "Priority must be between 0 and 100"))]
    pub priority: i32,
}

/// Query parameters for task creation
#[derive(Debug, Deserialize)]
pub struct CreateTaskParams {
    /// Owning user ID
    pub user_id: i32,
}

/// List all tasks
///
/// # Endpoint
///
/// ```text
/// GET /task/
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: Database error
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// Fetch a task by ID
///
/// # Endpoint
///
/// ```text
/// GET /task/:task_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Task does not exist
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// Create a task for an existing user
///
/// The slug is derived from the title; the owning user must exist.
///
/// # Endpoint
///
/// ```text
/// POST /task/create?user_id=1
/// Content-Type: application/json
///
/// {
///   "title": "Fix the roof",
///   "content": "Before the rain comes back",
///   "priority": 2
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Owning user does not exist
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_task(
    State(state): State<AppState>,
    Query(params): Query<CreateTaskParams>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    payload.validate()?;

    // A task cannot exist without a valid owning user
    if User::find_by_id(&state.db, params.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Task::create(
        &state.db,
        CreateTask {
            user_id: params.user_id,
            title: payload.title,
            content: payload.content,
            priority: payload.priority,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse {
            status_code: StatusCode::CREATED.as_u16(),
            transaction: "Successful".to_string(),
        }),
    ))
}

/// Replace a task's fields
///
/// Title, content, and priority are replaced; the slug is recomputed from
/// the new title.
///
/// # Endpoint
///
/// ```text
/// PUT /task/update/:task_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Task does not exist
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<TransactionResponse>> {
    payload.validate()?;

    let updated = Task::update(
        &state.db,
        task_id,
        UpdateTask {
            title: payload.title,
            content: payload.content,
            priority: payload.priority,
        },
    )
    .await?;

    if updated.is_none() {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(TransactionResponse {
        status_code: StatusCode::OK.as_u16(),
        transaction: "Task has been updated successfully".to_string(),
    }))
}

/// Remove a task
///
/// # Endpoint
///
/// ```text
/// DELETE /task/delete/:task_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Task does not exist
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<TransactionResponse>> {
    let deleted = Task::delete(&state.db, task_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(TransactionResponse {
        status_code: StatusCode::OK.as_u16(),
        transaction: "Task has been deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> TaskPayload {
        TaskPayload {
            title: "Fix the roof".to_string(),
            content: "Before the rain".to_string(),
            priority: 2,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let payload = TaskPayload {
            title: String::new(),
            ..valid_payload()
        };
        let err = payload.validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_priority_out_of_range_rejected() {
        let payload = TaskPayload {
            priority: 1000,
            ..valid_payload()
        };
        let err = payload.validate().unwrap_err();
        assert!(err.field_errors().contains_key("priority"));
    }
}
