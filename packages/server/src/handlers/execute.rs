use std::time::{Duration, Instant};

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use judge::ResourceLimits;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::execute::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/execute",
    tag = "Execution",
    operation_id = "executeCode",
    summary = "Run code against one input",
    description = "Runs the code in the sandbox against a single \
                   caller-supplied input and returns the raw output or error. \
                   Nothing is recorded; use submissions for judging.",
    request_body = ExecuteRequest,
    responses(
        (status = 200, description = "Execution result", body = ExecuteResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(language = %payload.language, entry_point = %payload.entry_point))]
pub async fn execute_code(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ExecuteRequest>,
) -> Result<Json<ExecuteResponse>, AppError> {
    validate_execute(&payload, state.config.judge.max_code_bytes)?;

    let limits = ResourceLimits {
        wall_time: Duration::from_millis(state.config.judge.time_limit_ms),
        memory_kb: Some(state.config.judge.memory_limit_kb),
    };
    let started = Instant::now();
    let outcome = state
        .engine
        .sandbox()
        .run(
            &payload.code,
            &payload.language,
            &payload.entry_point,
            &payload.input,
            &limits,
        )
        .await;
    let runtime_ms = started.elapsed().as_millis() as u64;

    Ok(Json(ExecuteResponse::from_outcome(outcome, runtime_ms)))
}
