// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed arcus root with both entry files, a
// fluent builder to customise it, and recording doubles for the executor and
// log seams.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use arcus_cli::cli::GlobalOpts;
use arcus_cli::config::{CONFIG_DIR, Config, ENVS_FILE, PACKAGES_FILE};
use arcus_cli::exec::{ExecStatus, Executor};
use arcus_cli::logging::{Log, TaskStatus};

/// Five packages, one per listing source.
pub const SAMPLE_PKGS: &str = r#"{
    "git",
    "sudo $PACMAN -S --noconfirm git"
},
{
    "code",
    "$YAY -S visual-studio-code-bin"
},
{
    "spotify",
    "flatpak install -y flathub com.spotify.Client"
},
{
    "oh-my-zsh",
    "git clone https://github.com/ohmyzsh/ohmyzsh ~/.oh-my-zsh"
},
{
    "rustup",
    "curl -sSf https://sh.rustup.rs | sh -s -- -y"
}
"#;

/// Two environment variables.
pub const SAMPLE_ENVS: &str = r#"{
    "PACMAN",
    "pacman"
},
{
    "YAY",
    "yay --noconfirm"
}
"#;

/// Write `arcus_config/` with the sample files into `root`.
pub fn setup_sample_root(root: &Path) {
    let conf = root.join(CONFIG_DIR);
    std::fs::create_dir_all(&conf).expect("create config dir");
    std::fs::write(conf.join(PACKAGES_FILE), SAMPLE_PKGS).expect("write packages file");
    std::fs::write(conf.join(ENVS_FILE), SAMPLE_ENVS).expect("write envs file");
}

/// An isolated arcus root backed by a [`tempfile::TempDir`].
pub struct IntegrationTestContext {
    /// Temporary directory holding `arcus_config/`.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a context with the sample entry files.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_sample_root(root.path());
        Self { root }
    }

    /// Path to the root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Global options pointing `--root` at this context.
    pub fn global_opts(&self, dry_run: bool) -> GlobalOpts {
        GlobalOpts {
            root: Some(self.root.path().to_path_buf()),
            dry_run,
        }
    }

    /// Load the configuration, panicking on error.
    pub fn load_config(&self) -> Config {
        Config::load(self.root.path()).expect("load config")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building from the sample root.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Overwrite `arcus_config/<filename>` with `content`.
    pub fn with_config_file(self, filename: &str, content: &str) -> Self {
        let path = self.ctx.root.path().join(CONFIG_DIR).join(filename);
        std::fs::write(path, content).expect("write config file");
        self
    }

    /// Delete `arcus_config/<filename>`.
    pub fn without_config_file(self, filename: &str) -> Self {
        let path = self.ctx.root.path().join(CONFIG_DIR).join(filename);
        std::fs::remove_file(path).expect("remove config file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}

/// One command seen by [`RecordingExecutor`].
#[derive(Debug, Clone)]
pub struct ShellCall {
    /// Script passed to the shell.
    pub script: String,
    /// Extra environment for the child.
    pub env: Vec<(String, String)>,
}

/// [`Executor`] that records calls and answers with scripted exit codes.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<ShellCall>>,
    exit_codes: Vec<(String, i32)>,
}

impl RecordingExecutor {
    /// Exit with `code` whenever `script` runs; everything else exits 0.
    pub fn exiting(mut self, script: &str, code: i32) -> Self {
        self.exit_codes.push((script.to_string(), code));
        self
    }

    /// Calls in the order they were made.
    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Scripts in the order they ran.
    pub fn scripts(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.script).collect()
    }
}

impl Executor for RecordingExecutor {
    fn run_shell(&self, script: &str, env: &[(String, String)]) -> Result<ExecStatus> {
        self.calls.lock().expect("calls lock").push(ShellCall {
            script: script.to_string(),
            env: env.to_vec(),
        });
        let code = self
            .exit_codes
            .iter()
            .find(|(s, _)| s == script)
            .map_or(0, |(_, c)| *c);
        Ok(ExecStatus::from_code(code))
    }

    fn which(&self, _program: &str) -> bool {
        false
    }
}

/// [`Log`] that keeps every message and task record in memory.
#[derive(Debug, Default)]
pub struct RecordingLog {
    messages: Mutex<Vec<(&'static str, String)>>,
    tasks: Mutex<Vec<(String, TaskStatus)>>,
}

impl RecordingLog {
    fn push(&self, level: &'static str, msg: &str) {
        self.messages
            .lock()
            .expect("messages lock")
            .push((level, msg.to_string()));
    }

    /// Messages logged at `level` (`"stage"`, `"info"`, `"warn"`, ...).
    pub fn at(&self, level: &str) -> Vec<String> {
        self.messages
            .lock()
            .expect("messages lock")
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Recorded task results in order.
    pub fn tasks(&self) -> Vec<(String, TaskStatus)> {
        self.tasks.lock().expect("tasks lock").clone()
    }
}

impl Log for RecordingLog {
    fn stage(&self, msg: &str) {
        self.push("stage", msg);
    }
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
    fn dry_run(&self, msg: &str) {
        self.push("dry_run", msg);
    }
    fn record_task(&self, name: &str, status: TaskStatus, _message: Option<&str>) {
        self.tasks
            .lock()
            .expect("tasks lock")
            .push((name.to_string(), status));
    }
}
