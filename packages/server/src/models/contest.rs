use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Contest;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct JoinContestRequest {
    pub user_id: Uuid,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ContestResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub problems: Vec<Uuid>,
    pub participant_count: usize,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Contest> for ContestResponse {
    fn from(c: Contest) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            start_time: c.start_time,
            end_time: c.end_time,
            problems: c.problems,
            participant_count: c.participants.len(),
            is_active: c.is_active,
            created_at: c.created_at,
        }
    }
}
