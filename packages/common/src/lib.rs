pub mod outcome;
pub mod status;
pub mod task;

pub use outcome::Outcome;
pub use status::SubmissionStatus;
pub use task::{CaseResult, JudgeReport, JudgeTask, TestCase};
