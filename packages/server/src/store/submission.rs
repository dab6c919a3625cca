use chrono::{DateTime, Utc};
use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

use common::SubmissionStatus;

/// One submit action. Created as `Pending`, finalized exactly once by the
/// judging pipeline, never deleted.
#[derive(Clone, Debug)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub code: String,
    pub language: String,
    pub status: SubmissionStatus,
    pub test_cases_passed: u32,
    /// Problem's test-case count at judging time; a later edit to the
    /// problem does not retroactively change this.
    pub total_test_cases: u32,
    pub runtime_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinalizeError {
    #[error("submission {0} not found")]
    NotFound(Uuid),
    #[error("submission {0} already finalized as {1}")]
    AlreadyFinal(Uuid, SubmissionStatus),
    #[error("cannot finalize submission {0} to non-terminal status")]
    NotTerminal(Uuid),
}

#[derive(Default)]
pub struct SubmissionStore {
    items: DashMap<Uuid, Submission>,
}

impl SubmissionStore {
    pub fn create(
        &self,
        user_id: Uuid,
        problem_id: Uuid,
        code: String,
        language: String,
        total_test_cases: u32,
    ) -> Submission {
        let submission = Submission {
            id: Uuid::new_v4(),
            user_id,
            problem_id,
            code,
            language,
            status: SubmissionStatus::Pending,
            test_cases_passed: 0,
            total_test_cases,
            runtime_ms: None,
            created_at: Utc::now(),
        };
        self.items.insert(submission.id, submission.clone());
        submission
    }

    pub fn get(&self, id: Uuid) -> Option<Submission> {
        self.items.get(&id).map(|s| s.clone())
    }

    /// A user's submissions, most recent first.
    pub fn by_user(&self, user_id: Uuid) -> Vec<Submission> {
        let mut submissions: Vec<Submission> = self
            .items
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.clone())
            .collect();
        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        submissions
    }

    /// Write the terminal status. Write-once: a submission that has already
    /// left `Pending` is never changed again.
    pub fn finalize(
        &self,
        id: Uuid,
        status: SubmissionStatus,
        test_cases_passed: u32,
        total_test_cases: u32,
        runtime_ms: Option<u64>,
    ) -> Result<Submission, FinalizeError> {
        if !status.is_final() {
            return Err(FinalizeError::NotTerminal(id));
        }
        let mut submission = self.items.get_mut(&id).ok_or(FinalizeError::NotFound(id))?;
        if submission.status.is_final() {
            return Err(FinalizeError::AlreadyFinal(id, submission.status));
        }
        submission.status = status;
        submission.test_cases_passed = test_cases_passed;
        submission.total_test_cases = total_test_cases;
        submission.runtime_ms = runtime_ms;
        Ok(submission.clone())
    }
}
