use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::SubmissionStatus;

use crate::error::AppError;
use crate::store::Submission;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSubmissionRequest {
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub code: String,
    /// Language tag, e.g. "javascript" or "python".
    pub language: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub code: String,
    pub language: String,
    pub status: SubmissionStatus,
    pub test_cases_passed: u32,
    pub total_test_cases: u32,
    pub runtime_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            problem_id: s.problem_id,
            code: s.code,
            language: s.language,
            status: s.status,
            test_cases_passed: s.test_cases_passed,
            total_test_cases: s.total_test_cases,
            runtime_ms: s.runtime_ms,
            created_at: s.created_at,
        }
    }
}

pub fn validate_create_submission(
    req: &CreateSubmissionRequest,
    max_code_bytes: usize,
) -> Result<(), AppError> {
    if req.code.trim().is_empty() {
        return Err(AppError::Validation("Code must not be empty".into()));
    }
    if req.code.len() > max_code_bytes {
        return Err(AppError::Validation(format!(
            "Code must be at most {max_code_bytes} bytes"
        )));
    }
    if req.language.trim().is_empty() {
        return Err(AppError::Validation("Language must not be empty".into()));
    }
    Ok(())
}
