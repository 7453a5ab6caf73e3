//! Running shell commands.
use anyhow::{Context, Result};
use std::process::{Command, ExitStatus};

/// Exit code a shell reports when its child was stopped by Ctrl-C.
const INTERRUPT_CODE: i32 = 130;

/// Outcome of a command run with inherited stdio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
    /// Whether the command exited with status zero.
    pub success: bool,
    /// Exit code, if the command exited normally.
    pub code: Option<i32>,
    /// Whether the command was stopped by an interrupt.
    pub interrupted: bool,
}

impl ExecStatus {
    /// Status for a command that exited with `code`.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
            interrupted: code == INTERRUPT_CODE,
        }
    }
}

impl From<ExitStatus> for ExecStatus {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::from_code(code);
        }
        Self {
            success: false,
            code: None,
            interrupted: killed_by_interrupt(status),
        }
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    // SIGINT
    status.signal() == Some(2)
}

#[cfg(not(unix))]
const fn killed_by_interrupt(_status: ExitStatus) -> bool {
    false
}

/// Runs install commands on behalf of the installer.
#[cfg_attr(test, mockall::automock)]
pub trait Executor: Send + Sync {
    /// Run `script` through the platform shell with `env` added to the
    /// inherited environment. Output goes straight to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell itself cannot be spawned.
    fn run_shell(&self, script: &str, env: &[(String, String)]) -> Result<ExecStatus>;

    /// Whether `program` is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] backed by real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_shell(&self, script: &str, env: &[(String, String)]) -> Result<ExecStatus> {
        let mut cmd = shell_command(script);
        cmd.envs(env.iter().map(|(k, v)| (k, v)));
        let status = cmd
            .status()
            .with_context(|| format!("failed to execute: {script}"))?;
        Ok(ExecStatus::from(status))
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[cfg(windows)]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", script]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", script]);
    cmd
}
