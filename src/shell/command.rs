//! Shell command execution.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{NgseedError, Result};

use super::platform::{is_ci, shell_executable, shell_flag};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Last `lines` lines of stderr, falling back to stdout.
    pub fn output_tail(&self, lines: usize) -> String {
        let output = if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        let all: Vec<&str> = output.lines().collect();
        all[all.len().saturating_sub(lines)..].join("\n")
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Capture both streams, running in `cwd`.
    pub fn captured(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            capture_stdout: true,
            capture_stderr: true,
        }
    }
}

fn stdio(capture: bool) -> Stdio {
    if capture {
        Stdio::piped()
    } else {
        Stdio::inherit()
    }
}

/// Execute a shell command.
///
/// Returns `Err` only when the shell cannot be started. A non-zero exit is
/// reported through [`CommandResult::success`].
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(shell_executable());
    cmd.arg(shell_flag(is_ci()));
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(stdio(options.capture_stdout));
    cmd.stderr(stdio(options.capture_stderr));

    tracing::debug!(command, cwd = ?options.cwd, "Running command");

    let output = cmd.output().map_err(|e| {
        tracing::debug!(command, error = %e, "Failed to start command");
        NgseedError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let result = CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    };

    tracing::debug!(
        command,
        exit_code = ?result.exit_code,
        elapsed_ms = result.duration.as_millis() as u64,
        "Command finished"
    );

    Ok(result)
}
