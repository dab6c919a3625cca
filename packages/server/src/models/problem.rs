use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::TestCase;

use crate::error::AppError;
use crate::store::{Difficulty, Example, NewProblem, Problem, ProblemFilter};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateProblemRequest {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub starter_code: BTreeMap<String, String>,
    pub entry_point: String,
}

/// Query parameters for the problem list. `difficulty` and `tags` accept
/// comma-separated values; all present predicates must match.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ProblemListQuery {
    /// Comma-separated difficulties (Easy, Medium, Hard).
    pub difficulty: Option<String>,
    pub category: Option<String>,
    /// Comma-separated tags; a problem matches if it carries any of them.
    pub tags: Option<String>,
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
}

impl ProblemListQuery {
    pub fn into_filter(self) -> Result<ProblemFilter, AppError> {
        let mut difficulty = Vec::new();
        if let Some(raw) = self.difficulty {
            for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                difficulty.push(Difficulty::from_str(part).map_err(AppError::Validation)?);
            }
        }
        let tags = self
            .tags
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(ProblemFilter {
            difficulty,
            category: self.category,
            tags,
            search: self.search,
        })
    }
}

/// List item: the statement body and test data are omitted.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProblemSummary {
    pub id: Uuid,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    /// Integer percentage of accepted submissions.
    pub acceptance_rate: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Problem> for ProblemSummary {
    fn from(p: Problem) -> Self {
        let acceptance_rate = p.acceptance_rate();
        Self {
            id: p.id,
            title: p.title,
            difficulty: p.difficulty,
            category: p.category,
            tags: p.tags,
            acceptance_rate,
            created_at: p.created_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProblemListResponse {
    pub data: Vec<ProblemSummary>,
    pub total: usize,
}

/// Full problem detail. Hidden test cases never leave the server; only
/// their count is exposed.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProblemResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub starter_code: BTreeMap<String, String>,
    pub entry_point: String,
    pub total_test_cases: usize,
    pub acceptance_rate: u64,
    pub accepted_submissions: u64,
    pub total_submissions: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        let acceptance_rate = p.acceptance_rate();
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            difficulty: p.difficulty,
            category: p.category,
            tags: p.tags,
            examples: p.examples,
            constraints: p.constraints,
            starter_code: p.starter_code,
            entry_point: p.entry_point,
            total_test_cases: p.test_cases.len(),
            acceptance_rate,
            accepted_submissions: p.accepted_submissions,
            total_submissions: p.total_submissions,
            created_at: p.created_at,
        }
    }
}

pub fn validate_create_problem(req: &CreateProblemRequest) -> Result<(), AppError> {
    if req.title.trim().is_empty() || req.title.len() > 200 {
        return Err(AppError::Validation(
            "Title must be non-empty and at most 200 characters".into(),
        ));
    }
    if req.description.trim().is_empty() {
        return Err(AppError::Validation("Description must not be empty".into()));
    }
    if req.test_cases.is_empty() {
        return Err(AppError::Validation(
            "A problem needs at least one test case".into(),
        ));
    }
    for case in &req.test_cases {
        if !case.input.is_array() {
            return Err(AppError::Validation(
                "Test case input must be a JSON array of arguments".into(),
            ));
        }
    }
    let entry = req.entry_point.trim();
    if entry.is_empty()
        || !entry
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::Validation(
            "Entry point must be a plain function name".into(),
        ));
    }
    Ok(())
}

impl CreateProblemRequest {
    pub fn into_new_problem(self) -> NewProblem {
        NewProblem {
            title: self.title.trim().to_string(),
            description: self.description,
            difficulty: self.difficulty,
            category: self.category,
            tags: self.tags,
            examples: self.examples,
            constraints: self.constraints,
            test_cases: self.test_cases,
            starter_code: self.starter_code,
            entry_point: self.entry_point.trim().to_string(),
        }
    }
}
