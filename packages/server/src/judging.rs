//! The pipeline from a pending submission to a stored terminal verdict.

use common::{JudgeReport, JudgeTask};
use tracing::{error, instrument, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::{FinalizeError, Submission};

/// Judge a pending submission end to end: run the verdict engine, write the
/// terminal status, bump the problem counters and apply the ledger award if
/// the verdict is Accepted. Returns the finalized record.
#[instrument(skip(state, submission), fields(submission_id = %submission.id))]
pub async fn judge_submission(
    state: &AppState,
    submission: Submission,
) -> Result<Submission, AppError> {
    let total = submission.total_test_cases;
    let report = match state.stores.problems.get(submission.problem_id) {
        Some(problem) => {
            let task = JudgeTask {
                submission_id: submission.id,
                language: submission.language.clone(),
                code: submission.code.clone(),
                entry_point: problem.entry_point.clone(),
                time_limit_ms: state.config.judge.time_limit_ms,
                memory_limit_kb: state.config.judge.memory_limit_kb,
                test_cases: problem.test_cases.clone(),
            };
            state.engine.judge(&task).await
        }
        None => {
            // The problem vanished between submit and judge. Nothing to run
            // against, so the verdict cannot be trusted either way.
            error!(problem_id = %submission.problem_id, "problem missing at judging time");
            JudgeReport::internal_error(submission.id, total)
        }
    };

    let finalized = match state.stores.submissions.finalize(
        submission.id,
        report.status,
        report.test_cases_passed,
        report.total_test_cases,
        report.time_used_ms,
    ) {
        Ok(finalized) => finalized,
        Err(FinalizeError::AlreadyFinal(id, status)) => {
            // A concurrent judge beat us to the write; its verdict stands.
            warn!(submission_id = %id, %status, "submission already finalized");
            return state
                .stores
                .submissions
                .get(id)
                .ok_or_else(|| AppError::Internal(format!("finalized submission {id} missing")));
        }
        Err(err) => return Err(AppError::Internal(err.to_string())),
    };

    state
        .stores
        .problems
        .record_judged(finalized.problem_id, finalized.status.is_accepted());

    if finalized.status.is_accepted()
        && let Err(err) = state.ledger.apply(&state.stores, &finalized)
    {
        return Err(AppError::Internal(err.to_string()));
    }

    Ok(finalized)
}
