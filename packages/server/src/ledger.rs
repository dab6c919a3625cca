//! Score/activity side effects of an accepted verdict.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::store::{ActivityKind, Stores, Submission};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("submission {0} is not accepted")]
    NotAccepted(Uuid),
    #[error("user {0} not found")]
    UnknownUser(Uuid),
}

/// Applies the award for an accepted submission as one atomic unit: score,
/// solved-count and the `problem_solved` activity land together or not at
/// all, exactly once per submission id.
pub struct Ledger {
    /// Submission ids whose award has been applied. Claimed before the
    /// mutation, which makes retried calls no-ops.
    applied: DashMap<Uuid, ()>,
    award: u64,
}

impl Ledger {
    pub fn new(award: u64) -> Self {
        Self {
            applied: DashMap::new(),
            award,
        }
    }

    /// Apply the award for `submission`. Returns `Ok(false)` when the award
    /// was already applied for this submission id.
    ///
    /// Same-user applications serialize on the user's entry lock; different
    /// users proceed fully in parallel. The award is granted per accepted
    /// submission and is not capped per problem.
    pub fn apply(&self, stores: &Stores, submission: &Submission) -> Result<bool, LedgerError> {
        if !submission.status.is_accepted() {
            return Err(LedgerError::NotAccepted(submission.id));
        }

        match self.applied.entry(submission.id) {
            Entry::Occupied(_) => {
                debug!(submission_id = %submission.id, "award already applied, skipping");
                Ok(false)
            }
            Entry::Vacant(slot) => {
                // Look up the user before claiming so a failed apply stays
                // retryable.
                let Some(mut user) = stores.users.get_mut(submission.user_id) else {
                    return Err(LedgerError::UnknownUser(submission.user_id));
                };
                slot.insert(());

                user.score += self.award;
                user.problems_solved += 1;
                let username = user.username.clone();
                let (score, solved) = (user.score, user.problems_solved);
                drop(user);

                let title = stores
                    .problems
                    .get(submission.problem_id)
                    .map(|p| p.title)
                    .unwrap_or_else(|| "a problem".to_string());
                stores.activities.append(
                    submission.user_id,
                    ActivityKind::ProblemSolved,
                    format!("{username} solved {title}"),
                    json!({ "problemId": submission.problem_id }),
                );

                info!(
                    submission_id = %submission.id,
                    user_id = %submission.user_id,
                    score,
                    problems_solved = solved,
                    "applied accepted-submission award"
                );
                Ok(true)
            }
        }
    }
}
