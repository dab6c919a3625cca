use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{Outcome, SubmissionStatus};

/// A single hidden test case: an input value (an array of arguments for the
/// problem's entry-point function) and the expected output value.
///
/// Order within a problem's test-case list matters only for deterministic
/// case numbering in reports, never for the verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestCase {
    /// Arguments passed to the entry point, as a JSON array.
    #[schema(value_type = Object)]
    pub input: Value,
    /// Expected return value.
    #[schema(value_type = Object)]
    pub expected_output: Value,
}

/// Everything the verdict engine needs to judge one submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JudgeTask {
    /// Submission being judged.
    pub submission_id: Uuid,
    /// Programming language tag (e.g. "javascript", "python").
    pub language: String,
    /// Candidate source code.
    pub code: String,
    /// Name of the function the harness should call.
    pub entry_point: String,
    /// Per-case wall-clock limit in milliseconds.
    pub time_limit_ms: u64,
    /// Per-case address-space ceiling in kilobytes.
    pub memory_limit_kb: u64,
    /// Test cases in problem order.
    pub test_cases: Vec<TestCase>,
}

/// Outcome of one test case within a judge report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseResult {
    /// Position of the case in the problem's test-case list.
    pub index: usize,
    /// Classified sandbox outcome. `None` if the case was cancelled after the
    /// verdict class was already decided by another case.
    pub outcome: Option<Outcome>,
    /// Whether the outcome matched the expected output.
    pub passed: bool,
    /// Wall time spent on this case in milliseconds, when it ran.
    pub time_used_ms: Option<u64>,
}

/// Result of judging one submission across all of its test cases.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JudgeReport {
    /// Submission that was judged.
    pub submission_id: Uuid,
    /// Final terminal status.
    pub status: SubmissionStatus,
    /// Count of cases whose outcome matched the expected output. Reported
    /// even for non-Accepted verdicts.
    pub test_cases_passed: u32,
    /// Test-case count of the problem at judging time.
    pub total_test_cases: u32,
    /// Maximum wall time across executed cases, milliseconds.
    pub time_used_ms: Option<u64>,
    /// Per-case detail, in problem order.
    pub cases: Vec<CaseResult>,
}

impl JudgeReport {
    /// A report for a submission the judge could not process at all.
    pub fn internal_error(submission_id: Uuid, total_test_cases: u32) -> Self {
        Self {
            submission_id,
            status: SubmissionStatus::InternalError,
            test_cases_passed: 0,
            total_test_cases,
            time_used_ms: None,
            cases: vec![],
        }
    }
}
