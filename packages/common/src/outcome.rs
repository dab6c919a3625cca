use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classified result of running candidate code against one test-case input.
///
/// The sandbox never fails out-of-band: every way a run can end is one of
/// these variants, so the verdict engine can reason about them uniformly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    /// The program terminated and produced this output value.
    Value(Value),
    /// The source failed to compile (or parse, for interpreted languages).
    CompileError(String),
    /// The program crashed, threw, or the sandbox could not run it.
    RuntimeError(String),
    /// The wall-clock limit expired and the program was killed.
    Timeout,
    /// No runner is registered for the requested language.
    UnsupportedLanguage,
}

impl Outcome {
    /// Whether this outcome passes a test case expecting `expected`.
    ///
    /// Equality is structural over the canonical JSON value: order-sensitive
    /// for arrays, key-set-sensitive for objects. `[1,0]` does not pass a
    /// case expecting `[0,1]`.
    pub fn passes(&self, expected: &Value) -> bool {
        matches!(self, Outcome::Value(output) if output == expected)
    }

    /// Whether this outcome counts as an error in the candidate program.
    pub fn is_program_error(&self) -> bool {
        matches!(self, Outcome::CompileError(_) | Outcome::RuntimeError(_))
    }
}
