use serde::{Deserialize, Serialize};
use serde_json::Value;

use common::Outcome;

use crate::error::AppError;

/// Ad-hoc run of candidate code against one caller-supplied input, backing
/// the editor's "run" action. No submission record is created.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ExecuteRequest {
    pub code: String,
    /// Language tag, e.g. "javascript" or "python".
    pub language: String,
    /// Arguments for the entry-point function, as a JSON array.
    pub input: Value,
    /// Name of the function to call, e.g. "twoSum".
    pub entry_point: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ExecuteResponse {
    /// Value the entry point returned, when the run completed.
    pub output: Option<Value>,
    /// Failure description, when it did not.
    pub error: Option<String>,
    pub runtime_ms: u64,
}

impl ExecuteResponse {
    pub fn from_outcome(outcome: Outcome, runtime_ms: u64) -> Self {
        let (output, error) = match outcome {
            Outcome::Value(output) => (Some(output), None),
            Outcome::CompileError(message) | Outcome::RuntimeError(message) => {
                (None, Some(message))
            }
            Outcome::Timeout => (None, Some("Time limit exceeded".to_string())),
            Outcome::UnsupportedLanguage => (None, Some("Language not supported".to_string())),
        };
        Self {
            output,
            error,
            runtime_ms,
        }
    }
}

pub fn validate_execute(req: &ExecuteRequest, max_code_bytes: usize) -> Result<(), AppError> {
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
    if !req.input.is_array() {
        return Err(AppError::Validation(
            "Input must be a JSON array of arguments".into(),
        ));
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
