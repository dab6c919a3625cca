use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::activity::{ActivityListQuery, ActivityResponse};
use crate::models::submission::SubmissionResponse;
use crate::models::user::*;
use crate::state::AppState;
use crate::store::UserStoreError;

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    operation_id = "createUser",
    summary = "Register a user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Username taken (USERNAME_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_user(&payload)?;
    let user = state
        .stores
        .users
        .create(payload.username.trim())
        .map_err(|UserStoreError::UsernameTaken(_)| AppError::UsernameTaken)?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    operation_id = "getUser",
    summary = "Get a user by ID",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(%id))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .stores
        .users
        .get(id)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/submissions",
    tag = "Users",
    operation_id = "listUserSubmissions",
    summary = "List a user's submissions, most recent first",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's submissions", body = Vec<SubmissionResponse>),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(%id))]
pub async fn list_user_submissions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    if state.stores.users.get(id).is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }
    let submissions = state
        .stores
        .submissions
        .by_user(id)
        .into_iter()
        .map(SubmissionResponse::from)
        .collect();
    Ok(Json(submissions))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/activities",
    tag = "Users",
    operation_id = "listUserActivities",
    summary = "List a user's recent activity",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ActivityListQuery,
    ),
    responses(
        (status = 200, description = "The user's recent activity", body = Vec<ActivityResponse>),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(%id))]
pub async fn list_user_activities(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActivityListQuery>,
) -> Result<Json<Vec<ActivityResponse>>, AppError> {
    if state.stores.users.get(id).is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }
    let activities = state
        .stores
        .activities
        .by_user(id, query.limit())
        .into_iter()
        .map(ActivityResponse::from)
        .collect();
    Ok(Json(activities))
}
