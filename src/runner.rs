// ABOUTME: Command runner abstraction over external process invocation.
// ABOUTME: The real runner spawns tabcmd synchronously with inherited stdio.

use crate::invocation::Invocation;
use std::process::Command;
use thiserror::Error;

/// Errors from spawning the external process.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

/// Narrow seam over process invocation so tests can substitute a fake
/// that returns controlled exit codes without spawning real processes.
pub trait CommandRunner {
    /// Run the invocation to completion and return its exit code.
    fn run(&self, invocation: &Invocation) -> Result<i32, RunnerError>;
}

/// Real runner: spawns the process, inherits stdin/stdout/stderr, and
/// blocks until the process exits. No timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32, RunnerError> {
        let status = Command::new(invocation.program())
            .args(invocation.arguments())
            .status()
            .map_err(|source| RunnerError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;
        // A signal-terminated process has no exit code.
        Ok(status.code().unwrap_or(-1))
    }
}
