//! Core logging types: per-package entries, status, and the [`Log`] trait.

/// Result of handling one package, kept for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// Package name.
    pub name: String,
    /// Final status of the package.
    pub status: TaskStatus,
    /// Optional detail (e.g. exit code or skip reason).
    pub message: Option<String>,
}

/// Status of a handled package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Install command exited successfully.
    Ok,
    /// Package was on the ignore list.
    Skipped,
    /// Dry-run mode; the command was only logged.
    DryRun,
    /// Install command failed or could not be started.
    Failed,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) is the real implementation; tests
/// substitute recorders so command code can be checked without a terminal.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a package result for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
