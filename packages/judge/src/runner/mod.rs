//! Language dispatch.
//!
//! One [`Runner`] per supported language, registered by tag. Adding a
//! language means registering a runner, never splicing source text into a
//! dispatch expression. An unregistered language yields
//! [`Outcome::UnsupportedLanguage`] without attempting partial execution.

pub mod javascript;
pub mod python;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use common::Outcome;

use crate::sandbox::{ResourceLimits, RunResult, SandboxError};

pub use javascript::NodeRunner;
pub use python::PythonRunner;

/// Executes candidate source against one input value.
///
/// Implementations must absorb every failure mode into an [`Outcome`]; the
/// verdict engine relies on `execute` never failing out-of-band.
#[async_trait]
pub trait Runner: Send + Sync {
    /// Language tag this runner is registered under.
    fn language(&self) -> &str;

    /// Run `code`, calling `entry_point` with the arguments in `input`
    /// (a JSON array), under `limits`.
    async fn execute(
        &self,
        code: &str,
        entry_point: &str,
        input: &Value,
        limits: &ResourceLimits,
    ) -> Outcome;
}

/// Registered runners, keyed by language tag.
#[derive(Default)]
pub struct RunnerRegistry {
    runners: HashMap<String, Arc<dyn Runner>>,
}

impl RunnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock interpreters registered.
    pub fn with_defaults(node_bin: &str, python_bin: &str) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(NodeRunner::new(node_bin)));
        registry.register(Arc::new(PythonRunner::new(python_bin)));
        registry
    }

    pub fn register(&mut self, runner: Arc<dyn Runner>) {
        self.runners.insert(runner.language().to_string(), runner);
    }

    pub fn get(&self, language: &str) -> Option<Arc<dyn Runner>> {
        self.runners.get(language).cloned()
    }

    /// Registered language tags, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.runners.keys().cloned().collect();
        tags.sort();
        tags
    }
}

/// The execution sandbox: one isolated run per test-case input.
pub struct Sandbox {
    registry: RunnerRegistry,
}

impl Sandbox {
    pub fn new(registry: RunnerRegistry) -> Self {
        Self { registry }
    }

    /// Run `code` against `input` under `limits`. Never fails out-of-band:
    /// every failure mode is an [`Outcome`] variant.
    pub async fn run(
        &self,
        code: &str,
        language: &str,
        entry_point: &str,
        input: &Value,
        limits: &ResourceLimits,
    ) -> Outcome {
        match self.registry.get(language) {
            Some(runner) => runner.execute(code, entry_point, input, limits).await,
            None => Outcome::UnsupportedLanguage,
        }
    }

    pub fn languages(&self) -> Vec<String> {
        self.registry.languages()
    }
}

/// One-line JSON protocol between a harness and its runner. The harness
/// prints exactly one envelope on stdout as its last line.
#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum HarnessEnvelope {
    Ok { output: Value },
    Error { kind: String, message: String },
}

/// Map a sandbox run onto an [`Outcome`] using the harness envelope.
pub(crate) fn classify(result: Result<RunResult, SandboxError>) -> Outcome {
    let execution = match result {
        Err(e) => return Outcome::RuntimeError(format!("sandbox: {e}")),
        Ok(RunResult::TimedOut) => return Outcome::Timeout,
        Ok(RunResult::Finished(execution)) => execution,
    };

    let envelope = execution
        .stdout
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| serde_json::from_str::<HarnessEnvelope>(line).ok());

    match envelope {
        Some(HarnessEnvelope::Ok { output }) => Outcome::Value(output),
        Some(HarnessEnvelope::Error { kind, message }) => match kind.as_str() {
            "compile" => Outcome::CompileError(message),
            _ => Outcome::RuntimeError(message),
        },
        None => {
            // The harness never got to report; the process died first
            // (signal, rlimit, interpreter missing its own deps).
            let detail = last_line(&execution.stderr)
                .unwrap_or_else(|| match execution.exit_code {
                    Some(code) => format!("process exited with code {code} without a result"),
                    None => "process was killed by a signal".to_string(),
                });
            Outcome::RuntimeError(detail)
        }
    }
}

fn last_line(text: &str) -> Option<String> {
    text.lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
}

/// Normalize the input value into the argument array the harness expects.
pub(crate) fn input_bytes(input: &Value) -> Vec<u8> {
    serde_json::to_vec(input).unwrap_or_else(|_| b"null".to_vec())
}
