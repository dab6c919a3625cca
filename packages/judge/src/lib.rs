//! Submission judging: sandboxed execution of untrusted candidate code and
//! deterministic verdict aggregation.
//!
//! Candidate programs always run in their own OS process with piped stdio,
//! a hard wall-clock deadline and rlimit ceilings. Language support is a
//! registry of [`Runner`]s; an unknown language is a verdict, not an error.

pub mod engine;
pub mod runner;
pub mod sandbox;

pub use engine::VerdictEngine;
pub use runner::{Runner, RunnerRegistry, Sandbox};
pub use sandbox::{ResourceLimits, SandboxError};
