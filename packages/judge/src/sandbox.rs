//! Process-level isolation for one candidate run.
//!
//! Each run gets its own process group, piped stdio, rlimit ceilings and a
//! hard wall-clock deadline. On expiry the whole group is SIGKILLed and
//! reaped; a run can therefore never outlive its limit, regardless of what
//! the candidate code does.

use std::process::Stdio;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::debug;

/// Captured output is truncated past this point; the pipe is then closed so
/// a program spamming stdout blocks or dies on EPIPE instead of growing the
/// judge's memory.
const OUTPUT_CAP: u64 = 1024 * 1024;

/// Ceilings applied to one sandboxed run.
#[derive(Clone, Copy, Debug)]
pub struct ResourceLimits {
    /// Hard wall-clock deadline.
    pub wall_time: Duration,
    /// Address-space ceiling in kilobytes (RLIMIT_AS), if any.
    pub memory_kb: Option<u64>,
}

/// Host-side failure while setting up or collecting a run. Candidate
/// failures are never reported through this type.
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("failed to spawn sandboxed process: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("failed to collect sandboxed process output: {0}")]
    Output(#[source] std::io::Error),
}

/// A run that terminated on its own, within the deadline.
#[derive(Debug)]
pub struct Execution {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub wall_time: Duration,
}

#[derive(Debug)]
pub enum RunResult {
    Finished(Execution),
    TimedOut,
}

/// Run `command` in an isolated child process, feeding `stdin` and enforcing
/// `limits`. Returns once the child exits or the deadline kills it.
pub async fn run_isolated(
    mut command: Command,
    stdin: &[u8],
    limits: &ResourceLimits,
) -> Result<RunResult, SandboxError> {
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(unix)]
    apply_unix_limits(&mut command, limits);

    let started = Instant::now();
    let mut child = command.spawn().map_err(SandboxError::Spawn)?;

    if let Some(mut pipe) = child.stdin.take() {
        // A write failure means the child exited before reading its input;
        // the classification then comes from its own output.
        let _ = pipe.write_all(stdin).await;
        let _ = pipe.shutdown().await;
    }

    let stdout_task = tokio::spawn(read_capped(child.stdout.take()));
    let stderr_task = tokio::spawn(read_capped(child.stderr.take()));

    match timeout(limits.wall_time, child.wait()).await {
        Ok(status) => {
            let status = status.map_err(SandboxError::Output)?;
            let stdout = stdout_task.await.unwrap_or_default();
            let stderr = stderr_task.await.unwrap_or_default();
            Ok(RunResult::Finished(Execution {
                exit_code: status.code(),
                stdout,
                stderr,
                wall_time: started.elapsed(),
            }))
        }
        Err(_) => {
            debug!(limit_ms = limits.wall_time.as_millis() as u64, "wall-clock limit hit, killing process group");
            kill_group(&mut child);
            let _ = child.wait().await;
            stdout_task.abort();
            stderr_task.abort();
            Ok(RunResult::TimedOut)
        }
    }
}

#[cfg(unix)]
fn apply_unix_limits(command: &mut Command, limits: &ResourceLimits) {
    command.process_group(0);

    let memory_bytes = limits.memory_kb.map(|kb| kb.saturating_mul(1024));
    // CPU ceiling is a backstop behind the wall-clock kill.
    let cpu_seconds = limits.wall_time.as_secs().saturating_add(2);

    unsafe {
        command.pre_exec(move || {
            if let Some(bytes) = memory_bytes {
                let limit = libc::rlimit {
                    rlim_cur: bytes,
                    rlim_max: bytes,
                };
                libc::setrlimit(libc::RLIMIT_AS, &limit);
            }
            let cpu = libc::rlimit {
                rlim_cur: cpu_seconds,
                rlim_max: cpu_seconds,
            };
            libc::setrlimit(libc::RLIMIT_CPU, &cpu);
            Ok(())
        });
    }
}

/// SIGKILL the child's whole process group so forked grandchildren die too.
fn kill_group(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        unsafe {
            libc::killpg(pid as i32, libc::SIGKILL);
        }
    }
    let _ = child.start_kill();
}

async fn read_capped<R>(pipe: Option<R>) -> String
where
    R: tokio::io::AsyncRead + Unpin,
{
    let Some(pipe) = pipe else {
        return String::new();
    };
    let mut buf = Vec::new();
    let _ = pipe.take(OUTPUT_CAP).read_to_end(&mut buf).await;
    String::from_utf8_lossy(&buf).into_owned()
}
