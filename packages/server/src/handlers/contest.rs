use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::contest::*;
use crate::state::AppState;
use crate::store::ActivityKind;

#[utoipa::path(
    get,
    path = "/api/v1/contests",
    tag = "Contests",
    operation_id = "listContests",
    summary = "List contests",
    responses(
        (status = 200, description = "All contests", body = Vec<ContestResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_contests(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContestResponse>>, AppError> {
    let contests = state
        .stores
        .contests
        .list()
        .into_iter()
        .map(ContestResponse::from)
        .collect();
    Ok(Json(contests))
}

#[utoipa::path(
    get,
    path = "/api/v1/contests/active",
    tag = "Contests",
    operation_id = "getActiveContest",
    summary = "Get the currently active contest",
    responses(
        (status = 200, description = "Active contest", body = ContestResponse),
        (status = 404, description = "No active contest (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_active_contest(
    State(state): State<AppState>,
) -> Result<Json<ContestResponse>, AppError> {
    let contest = state
        .stores
        .contests
        .active()
        .ok_or_else(|| AppError::NotFound("No active contest".into()))?;
    Ok(Json(contest.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/contests/{id}/join",
    tag = "Contests",
    operation_id = "joinContest",
    summary = "Join a contest",
    description = "Registers the user as a participant. Joining twice is a \
                   no-op and produces no second activity entry.",
    params(("id" = Uuid, Path, description = "Contest ID")),
    request_body = JoinContestRequest,
    responses(
        (status = 200, description = "Contest after the join", body = ContestResponse),
        (status = 404, description = "Contest or user not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(contest_id = %id, user_id = %payload.user_id))]
pub async fn join_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<JoinContestRequest>,
) -> Result<Json<ContestResponse>, AppError> {
    let user = state
        .stores
        .users
        .get(payload.user_id)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let joined = state
        .stores
        .contests
        .join(id, user.id)
        .ok_or_else(|| AppError::NotFound("Contest not found".into()))?;

    let contest = state
        .stores
        .contests
        .get(id)
        .ok_or_else(|| AppError::NotFound("Contest not found".into()))?;
    if joined {
        state.stores.activities.append(
            user.id,
            ActivityKind::ContestJoined,
            format!("{} joined {}", user.username, contest.title),
            json!({ "contestId": contest.id }),
        );
    }
    Ok(Json(contest.into()))
}
