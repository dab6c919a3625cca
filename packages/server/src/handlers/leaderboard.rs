use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::error::AppError;
use crate::leaderboard;
use crate::models::leaderboard::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/leaderboard",
    tag = "Leaderboard",
    operation_id = "getLeaderboard",
    summary = "Top users by score",
    description = "Users ordered by score descending. Equal scores rank the \
                   earlier-registered user first, so the ordering is total.",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Ranked users", body = Vec<LeaderboardEntry>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = leaderboard::top(&state.stores.users, query.limit())
        .into_iter()
        .enumerate()
        .map(|(i, user)| LeaderboardEntry::from_ranked(i + 1, user))
        .collect();
    Ok(Json(entries))
}
