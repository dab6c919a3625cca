//! Verdict aggregation across a submission's test cases.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use tracing::{debug, info, instrument};

use common::{CaseResult, JudgeReport, JudgeTask, Outcome, SubmissionStatus, TestCase};

use crate::runner::Sandbox;
use crate::sandbox::ResourceLimits;

/// Drives the sandbox across all test cases of one submission and reduces
/// the outcomes to a single terminal status.
pub struct VerdictEngine {
    sandbox: Arc<Sandbox>,
}

impl VerdictEngine {
    pub fn new(sandbox: Arc<Sandbox>) -> Self {
        Self { sandbox }
    }

    pub fn sandbox(&self) -> &Arc<Sandbox> {
        &self.sandbox
    }

    /// Judge one submission. Test cases run concurrently across disjoint
    /// sandbox instances; once a Timeout is observed the remaining in-flight
    /// cases are aborted — nothing outranks TimeLimitExceeded, so the verdict
    /// is already fixed. Lower-priority outcomes never abort siblings, which
    /// keeps the verdict independent of scheduling.
    #[instrument(skip(self, task), fields(submission_id = %task.submission_id, language = %task.language))]
    pub async fn judge(&self, task: &JudgeTask) -> JudgeReport {
        let total = task.test_cases.len();
        let limits = ResourceLimits {
            wall_time: Duration::from_millis(task.time_limit_ms),
            memory_kb: Some(task.memory_limit_kb),
        };

        let mut inflight = JoinSet::new();
        for (index, case) in task.test_cases.iter().cloned().enumerate() {
            let sandbox = Arc::clone(&self.sandbox);
            let code = task.code.clone();
            let language = task.language.clone();
            let entry_point = task.entry_point.clone();
            inflight.spawn(async move {
                let started = Instant::now();
                let outcome = sandbox
                    .run(&code, &language, &entry_point, &case.input, &limits)
                    .await;
                (index, outcome, started.elapsed())
            });
        }

        let mut cases: Vec<CaseResult> = (0..total)
            .map(|index| CaseResult {
                index,
                outcome: None,
                passed: false,
                time_used_ms: None,
            })
            .collect();

        let mut short_circuited = false;
        while let Some(joined) = inflight.join_next().await {
            let Ok((index, outcome, elapsed)) = joined else {
                // Aborted after short-circuit, or a panicked case task;
                // either way the slot stays unexecuted.
                continue;
            };
            let passed = outcome.passes(&task.test_cases[index].expected_output);
            let decides_class = matches!(outcome, Outcome::Timeout);
            cases[index] = CaseResult {
                index,
                outcome: Some(outcome),
                passed,
                time_used_ms: Some(elapsed.as_millis() as u64),
            };
            if decides_class && !short_circuited {
                short_circuited = true;
                debug!(case = index, "verdict class decided, aborting remaining cases");
                inflight.abort_all();
            }
        }

        let status = aggregate(&task.test_cases, &cases);
        let test_cases_passed = cases.iter().filter(|c| c.passed).count() as u32;
        let time_used_ms = cases.iter().filter_map(|c| c.time_used_ms).max();

        info!(
            status = %status,
            test_cases_passed,
            total_test_cases = total,
            "judged submission"
        );

        JudgeReport {
            submission_id: task.submission_id,
            status,
            test_cases_passed,
            total_test_cases: total as u32,
            time_used_ms,
            cases,
        }
    }
}

/// Deterministic reduction of the full outcome set, checked in fixed
/// priority order rather than execution order, so the verdict is independent
/// of whether cases ran sequentially or in parallel.
fn aggregate(test_cases: &[TestCase], cases: &[CaseResult]) -> SubmissionStatus {
    let outcomes = || cases.iter().map(|c| c.outcome.as_ref());

    if outcomes().any(|o| matches!(o, Some(Outcome::Timeout))) {
        return SubmissionStatus::TimeLimitExceeded;
    }
    if outcomes().any(|o| o.is_some_and(|o| o.is_program_error())) {
        return SubmissionStatus::RuntimeError;
    }
    let wrong = cases.iter().any(|c| match &c.outcome {
        Some(Outcome::Value(output)) => *output != test_cases[c.index].expected_output,
        _ => false,
    });
    if wrong {
        return SubmissionStatus::WrongAnswer;
    }
    // Unsupported language, or a case that never executed without a
    // short-circuiting cause: the judge, not the candidate, is at fault.
    let incomplete = outcomes().any(|o| matches!(o, Some(Outcome::UnsupportedLanguage) | None));
    if incomplete {
        return SubmissionStatus::InternalError;
    }
    SubmissionStatus::Accepted
}
