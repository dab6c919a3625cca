use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::problem::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/problems",
    tag = "Problems",
    operation_id = "createProblem",
    summary = "Create a new problem",
    request_body = CreateProblemRequest,
    responses(
        (status = 201, description = "Problem created", body = ProblemResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_problem(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProblemRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_problem(&payload)?;
    let problem = state.stores.problems.create(payload.into_new_problem());
    Ok((StatusCode::CREATED, Json(ProblemResponse::from(problem))))
}

#[utoipa::path(
    get,
    path = "/api/v1/problems",
    tag = "Problems",
    operation_id = "listProblems",
    summary = "List problems with optional filters",
    description = "Returns problems matching all present filter predicates. \
                   An absent or empty predicate does not constrain the result.",
    params(ProblemListQuery),
    responses(
        (status = 200, description = "Matching problems", body = ProblemListResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ProblemListQuery>,
) -> Result<Json<ProblemListResponse>, AppError> {
    let filter = query.into_filter()?;
    let data: Vec<ProblemSummary> = state
        .stores
        .problems
        .list(&filter)
        .into_iter()
        .map(ProblemSummary::from)
        .collect();
    let total = data.len();
    Ok(Json(ProblemListResponse { data, total }))
}

#[utoipa::path(
    get,
    path = "/api/v1/problems/{id}",
    tag = "Problems",
    operation_id = "getProblem",
    summary = "Get a problem by ID",
    params(("id" = Uuid, Path, description = "Problem ID")),
    responses(
        (status = 200, description = "Problem details", body = ProblemResponse),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(%id))]
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProblemResponse>, AppError> {
    let problem = state
        .stores
        .problems
        .get(id)
        .ok_or_else(|| AppError::NotFound("Problem not found".into()))?;
    Ok(Json(problem.into()))
}
