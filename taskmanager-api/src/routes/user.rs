/// User CRUD endpoints
///
/// # Endpoints
///
/// - `GET /user/` - List all users
/// - `GET /user/:user_id` - Fetch one user
/// - `POST /user/create` - Create a user
/// - `GET /user/:user_id/tasks` - List a user's tasks
/// - `PUT /user/update/:user_id` - Replace user fields
/// - `DELETE /user/delete_users?user_id=` - Delete user and cascade tasks

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
    task::Task,
    user::{CreateUser, UpdateUser, User},
};
use validator::Validate;

/// Create/update user payload
///
/// Full-field replace semantics on update; the slug is derived from the
/// username server-side and is not part of the payload.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    /// Username (unique, slug source)
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    /// First name
    #[validate(length(max = 64, message = "First name must be at most 64 characters"))]
    pub firstname: String,

    /// Last name
    #[validate(length(max = 64, message = "Last name must be at most 64 characters"))]
    pub lastname: String,

    /// Age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,
}

/// Query parameters for user deletion
#[derive(Debug, Deserialize)]
pub struct DeleteUserParams {
    /// User to delete
    pub user_id: i32,
}

/// List all users
///
/// # Endpoint
///
/// ```text
/// GET /user/
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Fetch a user by ID
///
/// # Endpoint
///
/// ```text
/// GET /user/:user_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: User does not exist
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// Create a user
///
/// The username must be unique; the slug is derived from it.
///
/// # Endpoint
///
/// ```text
/// POST /user/create
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "firstname": "Alice",
///   "lastname": "Lidell",
///   "age": 27
/// }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: Username already taken
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    payload.validate()?;

    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Duplicated username".to_string()));
    }

    User::create(
        &state.db,
        CreateUser {
            username: payload.username,
            firstname: payload.firstname,
            lastname: payload.lastname,
            age: payload.age,
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

/// List all tasks owned by a user
///
/// # Endpoint
///
/// ```text
/// GET /user/:user_id/tasks
/// ```
///
/// # Errors
///
/// - `404 Not Found`: User does not exist
pub async fn tasks_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    let tasks = Task::list_by_user(&state.db, user_id).await?;
    Ok(Json(tasks))
}

/// Replace a user's fields
///
/// All profile fields are replaced and the slug is recomputed from the new
/// username. A username collision with another user surfaces as a conflict.
///
/// # Endpoint
///
/// ```text
/// PUT /user/update/:user_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: User does not exist
/// - `409 Conflict`: New username already taken by another user
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<Json<TransactionResponse>> {
    payload.validate()?;

    let updated = User::update(
        &state.db,
        user_id,
        UpdateUser {
            username: payload.username,
            firstname: payload.firstname,
            lastname: payload.lastname,
            age: payload.age,
        },
    )
    .await?;

    if updated.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(TransactionResponse {
        status_code: StatusCode::OK.as_u16(),
        transaction: "User has been updated successfully".to_string(),
    }))
}

/// Delete a user and all of its tasks
///
/// The user's tasks are removed first, then the user, in one transaction.
///
/// # Endpoint
///
/// ```text
/// DELETE /user/delete_users?user_id=1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: User does not exist
pub async fn delete_user(
    State(state): State<AppState>,
    Query(params): Query<DeleteUserParams>,
) -> ApiResult<Json<TransactionResponse>> {
    let removed = User::delete_with_tasks(&state.db, params.user_id).await?;

    if removed.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(TransactionResponse {
        status_code: StatusCode::OK.as_u16(),
        transaction: "User deletion is successful".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> UserPayload {
        UserPayload {
            username: "alice".to_string(),
            firstname: "Alice".to_string(),
            lastname: "Lidell".to_string(),
            age: 27,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        let payload = UserPayload {
            username: String::new(),
            ..valid_payload()
        };
        let err = payload.validate().unwrap_err();
        assert!(err.field_errors().contains_key("username"));
    }

    #[test]
    fn test_negative_age_rejected() {
        let payload = UserPayload {
            age: -1,
            ..valid_payload()
        };
        let err = payload.validate().unwrap_err();
        assert!(err.field_errors().contains_key("age"));
    }
}
