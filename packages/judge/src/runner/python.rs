//! Python runner backed by a `python3` subprocess.

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;

use common::Outcome;

use super::{Runner, classify, input_bytes};
use crate::sandbox::{ResourceLimits, run_isolated};

/// Python counterpart of the JavaScript harness. Also tries the snake_case
/// form of the entry point, since problems carry one canonical (camelCase)
/// entry name while Python templates define `two_sum`-style functions.
const HARNESS: &str = r#"import json
import re
import sys
import traceback


def emit(payload):
    sys.stdout.write(json.dumps(payload) + "\n")


def snake_case(name):
    return re.sub(r"(?<!^)(?=[A-Z])", "_", name).lower()


source_path, entry = sys.argv[1], sys.argv[2]
with open(source_path) as f:
    source = f.read()

try:
    args = json.load(sys.stdin)
except ValueError as err:
    emit({"status": "error", "kind": "runtime", "message": "invalid input: %s" % err})
    sys.exit(1)
if not isinstance(args, list):
    args = [args]

try:
    code = compile(source, "solution.py", "exec")
except SyntaxError as err:
    message = "".join(traceback.format_exception_only(type(err), err)).strip()
    emit({"status": "error", "kind": "compile", "message": message})
    sys.exit(1)

scope = {}
try:
    exec(code, scope)
except BaseException as err:
    emit({"status": "error", "kind": "runtime", "message": "%s: %s" % (type(err).__name__, err)})
    sys.exit(1)

fn = scope.get(entry) or scope.get(snake_case(entry))
if not callable(fn):
    emit({"status": "error", "kind": "compile", "message": "entry point %r is not defined" % entry})
    sys.exit(1)

try:
    output = fn(*args)
except BaseException as err:
    emit({"status": "error", "kind": "runtime", "message": "%s: %s" % (type(err).__name__, err)})
    sys.exit(1)

emit({"status": "ok", "output": output})
"#;

pub struct PythonRunner {
    binary: String,
}

impl PythonRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl Runner for PythonRunner {
    fn language(&self) -> &str {
        "python"
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
        let harness_path = dir.path().join("harness.py");
        let source_path = dir.path().join("solution.py");
        if let Err(e) = tokio::fs::write(&harness_path, HARNESS).await {
            return Outcome::RuntimeError(format!("sandbox: {e}"));
        }
        if let Err(e) = tokio::fs::write(&source_path, code).await {
            return Outcome::RuntimeError(format!("sandbox: {e}"));
        }

        let mut command = Command::new(&self.binary);
        command
            .arg("-I") // isolated mode: no site-packages, no env hooks
            .arg(&harness_path)
            .arg(&source_path)
            .arg(entry_point)
            .current_dir(dir.path());

        let result = run_isolated(command, &input_bytes(input), limits).await;
        drop(dir);
        classify(result)
    }
}
