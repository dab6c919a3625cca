use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::User;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct LeaderboardQuery {
    /// Number of entries to return. Default 10, capped at 100.
    pub limit: Option<usize>,
}

impl LeaderboardQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(10).min(100)
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LeaderboardEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub user_id: Uuid,
    pub username: String,
    pub score: u64,
    pub problems_solved: u64,
}

impl LeaderboardEntry {
    pub fn from_ranked(rank: usize, user: User) -> Self {
        Self {
            rank,
            user_id: user.id,
            username: user.username,
            score: user.score,
            problems_solved: user.problems_solved,
        }
    }
}
