use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ProblemSolved,
    SubmissionMade,
    ContestJoined,
}

/// Append-only feed entry; never mutated or deleted.
#[derive(Clone, Debug)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ActivityKind,
    pub description: String,
    /// Opaque payload (problem/contest id).
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    /// Monotonic insertion counter; keeps feed ordering total even when two
    /// entries land on the same timestamp.
    pub seq: u64,
}

#[derive(Default)]
pub struct ActivityStore {
    items: DashMap<Uuid, Activity>,
    next_seq: AtomicU64,
}

impl ActivityStore {
    pub fn append(
        &self,
        user_id: Uuid,
        kind: ActivityKind,
        description: String,
        metadata: Value,
    ) -> Activity {
        let activity = Activity {
            id: Uuid::new_v4(),
            user_id,
            kind,
            description,
            metadata,
            created_at: Utc::now(),
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
        };
        self.items.insert(activity.id, activity.clone());
        activity
    }

    /// Most recent activities first, bounded by `limit`.
    pub fn recent(&self, limit: usize) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self.items.iter().map(|a| a.clone()).collect();
        activities.sort_by(|a, b| b.seq.cmp(&a.seq));
        activities.truncate(limit);
        activities
    }

    /// One user's most recent activities.
    pub fn by_user(&self, user_id: Uuid, limit: usize) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .items
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.clone())
            .collect();
        activities.sort_by(|a, b| b.seq.cmp(&a.seq));
        activities.truncate(limit);
        activities
    }

    /// Count of entries of one kind for one user (test support).
    pub fn count_for_user(&self, user_id: Uuid, kind: ActivityKind) -> usize {
        self.items
            .iter()
            .filter(|a| a.user_id == user_id && a.kind == kind)
            .count()
    }
}
