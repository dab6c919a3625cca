use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::store::{Activity, ActivityKind};

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ActivityListQuery {
    /// Maximum number of entries to return. Default 20, capped at 100.
    pub limit: Option<usize>,
}

impl ActivityListQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(20).min(100)
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ActivityKind,
    pub description: String,
    #[schema(value_type = Object)]
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

impl From<Activity> for ActivityResponse {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            kind: a.kind,
            description: a.description,
            metadata: a.metadata,
            created_at: a.created_at,
        }
    }
}
