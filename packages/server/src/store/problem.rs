use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::TestCase;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(format!(
                "Invalid difficulty '{other}'. Valid values: Easy, Medium, Hard"
            )),
        }
    }
}

/// A worked example shown in the problem statement (display-only).
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Example {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

/// An algorithm problem. Immutable after creation except for the aggregate
/// submission counters.
#[derive(Clone, Debug)]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub examples: Vec<Example>,
    /// Display-only constraint lines.
    pub constraints: Vec<String>,
    /// Hidden test cases, in report order.
    pub test_cases: Vec<TestCase>,
    /// Starter template per language tag.
    pub starter_code: BTreeMap<String, String>,
    /// Canonical entry-point function name the harness calls.
    pub entry_point: String,
    pub accepted_submissions: u64,
    pub total_submissions: u64,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// Integer percentage of accepted submissions.
    pub fn acceptance_rate(&self) -> u64 {
        if self.total_submissions == 0 {
            0
        } else {
            self.accepted_submissions * 100 / self.total_submissions
        }
    }
}

/// Fields required to create a problem; id, counters and creation time are
/// assigned by the store.
#[derive(Clone, Debug)]
pub struct NewProblem {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub test_cases: Vec<TestCase>,
    pub starter_code: BTreeMap<String, String>,
    pub entry_point: String,
}

/// Conjunction of independent predicates; an empty predicate means
/// "no constraint".
#[derive(Clone, Debug, Default)]
pub struct ProblemFilter {
    pub difficulty: Vec<Difficulty>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub search: Option<String>,
}

impl ProblemFilter {
    pub fn matches(&self, problem: &Problem) -> bool {
        if !self.difficulty.is_empty() && !self.difficulty.contains(&problem.difficulty) {
            return false;
        }
        if let Some(ref category) = self.category
            && !category.is_empty()
            && problem.category != *category
        {
            return false;
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| problem.tags.contains(t)) {
            return false;
        }
        if let Some(ref term) = self.search
            && !term.is_empty()
        {
            let term = term.to_lowercase();
            if !problem.title.to_lowercase().contains(&term)
                && !problem.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        true
    }
}

#[derive(Default)]
pub struct ProblemStore {
    items: DashMap<Uuid, Problem>,
}

impl ProblemStore {
    /// Create a problem with a fresh id and zeroed aggregate counters.
    pub fn create(&self, new: NewProblem) -> Problem {
        let problem = Problem {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            difficulty: new.difficulty,
            category: new.category,
            tags: new.tags,
            examples: new.examples,
            constraints: new.constraints,
            test_cases: new.test_cases,
            starter_code: new.starter_code,
            entry_point: new.entry_point,
            accepted_submissions: 0,
            total_submissions: 0,
            created_at: Utc::now(),
        };
        self.items.insert(problem.id, problem.clone());
        problem
    }

    /// Insert a fully-formed record (seeding and tests).
    pub fn insert(&self, problem: Problem) {
        self.items.insert(problem.id, problem);
    }

    pub fn get(&self, id: Uuid) -> Option<Problem> {
        self.items.get(&id).map(|p| p.clone())
    }

    /// Problems matching `filter`, in stable creation order.
    pub fn list(&self, filter: &ProblemFilter) -> Vec<Problem> {
        let mut problems: Vec<Problem> = self
            .items
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.clone())
            .collect();
        problems.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        problems
    }

    /// Bump the aggregate counters after a submission reached a terminal
    /// status. The rest of the problem stays immutable.
    pub fn record_judged(&self, id: Uuid, accepted: bool) {
        if let Some(mut problem) = self.items.get_mut(&id) {
            problem.total_submissions += 1;
            if accepted {
                problem.accepted_submissions += 1;
            }
        }
    }
}
