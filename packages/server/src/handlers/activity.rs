use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::error::AppError;
use crate::models::activity::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/activities",
    tag = "Activities",
    operation_id = "listActivities",
    summary = "Global activity feed, most recent first",
    params(ActivityListQuery),
    responses(
        (status = 200, description = "Recent activity", body = Vec<ActivityResponse>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_activities(
    State(state): State<AppState>,
    Query(query): Query<ActivityListQuery>,
) -> Result<Json<Vec<ActivityResponse>>, AppError> {
    let activities = state
        .stores
        .activities
        .recent(query.limit())
        .into_iter()
        .map(ActivityResponse::from)
        .collect();
    Ok(Json(activities))
}
