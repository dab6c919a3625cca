//! JavaScript runner backed by a `node` subprocess.

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;

use common::Outcome;

use super::{Runner, classify, input_bytes};
use crate::sandbox::{ResourceLimits, run_isolated};

/// Fixed harness run inside the sandboxed process. Reads the argument array
/// from stdin, loads the candidate source, calls the entry point and prints
/// a single JSON envelope line.
const HARNESS: &str = r#""use strict";
const fs = require("fs");

function emit(payload) {
  process.stdout.write(JSON.stringify(payload) + "\n");
}

const source = fs.readFileSync(process.argv[2], "utf8");
const entry = process.argv[3];

let args;
try {
  args = JSON.parse(fs.readFileSync(0, "utf8"));
} catch (err) {
  emit({ status: "error", kind: "runtime", message: "invalid input: " + err.message });
  process.exit(1);
}
if (!Array.isArray(args)) {
  args = [args];
}

let entryFn;
try {
  const factory = new Function(
    source + "\n;return (typeof " + entry + " === 'function') ? " + entry + " : undefined;"
  );
  entryFn = factory();
} catch (err) {
  const kind = err instanceof SyntaxError ? "compile" : "runtime";
  emit({ status: "error", kind: kind, message: String(err) });
  process.exit(1);
}
if (typeof entryFn !== "function") {
  emit({ status: "error", kind: "compile", message: "entry point '" + entry + "' is not defined" });
  process.exit(1);
}

try {
  const output = entryFn(...args);
  emit({ status: "ok", output: output === undefined ? null : output });
} catch (err) {
  emit({ status: "error", kind: "runtime", message: String(err) });
  process.exit(1);
}
"#;

pub struct NodeRunner {
    binary: String,
}

impl NodeRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl Runner for NodeRunner {
    fn language(&self) -> &str {
        "javascript"
    }

    async fn execute(
        &self,
        code: &str,
        entry_point: &str,
        input: &Value,
        limits: &ResourceLimits,
    ) -> Outcome {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => return Outcome::RuntimeError(format!("sandbox: {e}")),
        };
        let harness_path = dir.path().join("harness.js");
        let source_path = dir.path().join("solution.js");
        if let Err(e) = tokio::fs::write(&harness_path, HARNESS).await {
            return Outcome::RuntimeError(format!("sandbox: {e}"));
        }
        if let Err(e) = tokio::fs::write(&source_path, code).await {
            return Outcome::RuntimeError(format!("sandbox: {e}"));
        }

        let mut command = Command::new(&self.binary);
        command
            .arg(&harness_path)
            .arg(&source_path)
            .arg(entry_point)
            .current_dir(dir.path());

        let result = run_isolated(command, &input_bytes(input), limits).await;
        // `dir` lives until here so the temp files survive the run.
        drop(dir);
        classify(result)
    }
}
