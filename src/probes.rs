#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::Path, time::Duration};

use async_trait::async_trait;
use which::which;

use crate::process::run_collect_with_deadline;

/// Ways an external tool invocation can fail short of producing an exit
/// status. Each variant maps to a different partial-credit outcome, so
/// callers match on them rather than on a flattened error string.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The executable could not be found on the search path.
    #[error("`{0}` is not installed or not on PATH")]
    ToolMissing(String),
    /// The tool ran past its deadline and was killed.
    #[error("`{0}` timed out after {1}s")]
    TimedOut(String, u64),
    /// The tool was found but could not be spawned or collected.
    #[error("failed to run `{0}`: {1}")]
    Spawn(String, String),
}

/// Output of a tool that ran to completion, successfully or not.
#[derive(Debug, Clone)]
pub struct ProbeOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Contents written to stdout, lossily decoded.
    pub stdout: String,
    /// Contents written to stderr, lossily decoded.
    pub stderr: String,
}

/// Narrow seam over external tool execution so evaluators can be exercised
/// against a fake in tests.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Runs `program` with `args` in `cwd`, killing it after `limit`.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        limit: Duration,
    ) -> Result<ProbeOutput, ProbeError>;
}

/// The real runner: resolves the tool with `which`, then executes it with a
/// deadline via [`crate::process`].
#[derive(Debug, Default)]
pub struct SystemRunner;

#[async_trait]
impl ToolRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        limit: Duration,
    ) -> Result<ProbeOutput, ProbeError> {
        let resolved =
            which(program).map_err(|_| ProbeError::ToolMissing(program.to_string()))?;

        match run_collect_with_deadline(&resolved, args, cwd, limit).await {
            Ok(Some(collected)) => Ok(ProbeOutput {
                success: collected.status.success(),
                stdout: String::from_utf8_lossy(&collected.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&collected.stderr).into_owned(),
            }),
            Ok(None) => Err(ProbeError::TimedOut(program.to_string(), limit.as_secs())),
            Err(e) => Err(ProbeError::Spawn(program.to_string(), e.to_string())),
        }
    }
}
