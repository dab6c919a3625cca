use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::judging::judge_submission;
use crate::models::submission::*;
use crate::state::AppState;
use crate::store::ActivityKind;

#[utoipa::path(
    post,
    path = "/api/v1/submissions",
    tag = "Submissions",
    operation_id = "createSubmission",
    summary = "Submit code for judging",
    description = "Creates a submission, judges it against the problem's \
                   hidden test cases and returns the record with its terminal \
                   status. Sandbox failures surface as verdicts, never as \
                   HTTP errors.",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Judged submission", body = SubmissionResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "User or problem not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_id = %payload.user_id, problem_id = %payload.problem_id, language = %payload.language))]
pub async fn create_submission(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_submission(&payload, state.config.judge.max_code_bytes)?;

    let user = state
        .stores
        .users
        .get(payload.user_id)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let problem = state
        .stores
        .problems
        .get(payload.problem_id)
        .ok_or_else(|| AppError::NotFound("Problem not found".into()))?;

    let submission = state.stores.submissions.create(
        user.id,
        problem.id,
        payload.code,
        payload.language,
        problem.test_cases.len() as u32,
    );
    state.stores.activities.append(
        user.id,
        ActivityKind::SubmissionMade,
        format!("{} submitted {}", user.username, problem.title),
        json!({ "problemId": problem.id, "submissionId": submission.id }),
    );

    let judged = judge_submission(&state, submission).await?;
    Ok((StatusCode::CREATED, Json(SubmissionResponse::from(judged))))
}

#[utoipa::path(
    get,
    path = "/api/v1/submissions/{id}",
    tag = "Submissions",
    operation_id = "getSubmission",
    summary = "Get a submission by ID",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission details", body = SubmissionResponse),
        (status = 404, description = "Submission not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(%id))]
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let submission = state
        .stores
        .submissions
        .get(id)
        .ok_or_else(|| AppError::NotFound("Submission not found".into()))?;
    Ok(Json(submission.into()))
}
