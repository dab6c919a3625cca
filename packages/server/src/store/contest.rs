use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// A contest window. Peripheral to the judging core: it only matters as a
/// trigger for `contest_joined` activity records.
#[derive(Clone, Debug)]
pub struct Contest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub problems: Vec<Uuid>,
    pub participants: Vec<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct ContestStore {
    items: DashMap<Uuid, Contest>,
}

impl ContestStore {
    pub fn insert(&self, contest: Contest) {
        self.items.insert(contest.id, contest);
    }

    pub fn get(&self, id: Uuid) -> Option<Contest> {
        self.items.get(&id).map(|c| c.clone())
    }

    pub fn list(&self) -> Vec<Contest> {
        let mut contests: Vec<Contest> = self.items.iter().map(|c| c.clone()).collect();
        contests.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        contests
    }

    pub fn active(&self) -> Option<Contest> {
        self.items.iter().find(|c| c.is_active).map(|c| c.clone())
    }

    /// Add a participant once. `None` if the contest does not exist;
    /// `Some(false)` if the user was already registered.
    pub fn join(&self, contest_id: Uuid, user_id: Uuid) -> Option<bool> {
        let mut contest = self.items.get_mut(&contest_id)?;
        if contest.participants.contains(&user_id) {
            return Some(false);
        }
        contest.participants.push(user_id);
        Some(true)
    }
}
