//! In-memory arena repositories.
//!
//! Each entity collection lives behind its own store with explicit
//! operations, keyed by UUID in a concurrent map. Reads clone the record;
//! mutation happens under the map's per-entry exclusive lock, which is what
//! serializes concurrent updates touching the same entity.

pub mod activity;
pub mod contest;
pub mod problem;
pub mod submission;
pub mod user;

pub use activity::{Activity, ActivityKind, ActivityStore};
pub use contest::{Contest, ContestStore};
pub use problem::{Difficulty, Example, NewProblem, Problem, ProblemFilter, ProblemStore};
pub use submission::{FinalizeError, Submission, SubmissionStore};
pub use user::{User, UserStore, UserStoreError};

/// All five entity collections.
#[derive(Default)]
pub struct Stores {
    pub problems: ProblemStore,
    pub users: UserStore,
    pub submissions: SubmissionStore,
    pub activities: ActivityStore,
    pub contests: ContestStore,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}
