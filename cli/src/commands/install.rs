//! Command: run the install command of every package.
use anyhow::Result;
use std::fmt;
use std::io::{self, Read, Write as _};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{CommandSetup, IgnoreList, list};
use crate::cli::{GlobalOpts, InstallOpts};
use crate::config::Config;
use crate::config::arcus::{SystemAllocator, read_line};
use crate::config::envs::EnvVar;
use crate::error::InstallError;
use crate::exec::{Executor, SystemExecutor};
use crate::logging::{Log, Logger, TaskStatus};

/// Variable holding the name of the package being installed.
pub const PACKAGE_ENV: &str = "ARCUS_PACKAGES";

/// Read one answer line; a leading `y` or `Y` confirms.
///
/// End of input counts as consent. Any line that does not start with `y`,
/// an empty one included, declines.
///
/// # Errors
///
/// Returns an error if `input` fails.
pub fn read_confirmation<R: Read + ?Sized>(input: &mut R) -> io::Result<bool> {
    let answer = read_line(input, b'\n', true, &SystemAllocator)?;
    Ok(answer.is_none_or(|line| matches!(line.as_bytes().first().copied(), Some(b'y' | b'Y'))))
}

#[allow(clippy::print_stdout)]
fn confirm() -> Result<bool> {
    print!("Continue with installation? (Y/n): ");
    io::stdout().flush()?;
    Ok(read_confirmation(&mut io::stdin().lock())?)
}

/// Counts for one install run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Commands that exited successfully.
    pub installed: usize,
    /// Packages on the ignore list.
    pub ignored: usize,
    /// Commands only logged because of `--dry-run`.
    pub dry_run: usize,
    /// Commands that failed or could not be started.
    pub failed: usize,
}

/// Runs package commands in file order.
pub struct Installer<'a> {
    executor: &'a dyn Executor,
    log: &'a dyn Log,
    dry_run: bool,
    interrupted: &'a AtomicBool,
}

impl fmt::Debug for Installer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Installer")
            .field("dry_run", &self.dry_run)
            .field("interrupted", &self.interrupted)
            .finish_non_exhaustive()
    }
}

impl<'a> Installer<'a> {
    /// Create an installer. `interrupted` is polled between packages.
    #[must_use]
    pub const fn new(
        executor: &'a dyn Executor,
        log: &'a dyn Log,
        dry_run: bool,
        interrupted: &'a AtomicBool,
    ) -> Self {
        Self {
            executor,
            log,
            dry_run,
            interrupted,
        }
    }

    /// Install every package not on `ignore`.
    ///
    /// Each command sees the variables from `arcus.envs` plus
    /// [`PACKAGE_ENV`]. A failing command is recorded and the run goes on.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Interrupted`] as soon as an interrupt is seen,
    /// either through the flag or from a command's exit status.
    pub fn install(&self, config: &Config, ignore: &IgnoreList) -> Result<Outcome, InstallError> {
        let base_env = env_pairs(&config.env_vars);
        for (name, value) in &base_env {
            self.log.debug(&format!("environment: {name}={value}"));
        }

        let mut outcome = Outcome::default();
        for package in &config.packages {
            self.check_interrupt(&package.name)?;

            if ignore.contains(&package.name) {
                self.log.info(&format!("ignoring {}", package.name));
                self.log
                    .record_task(&package.name, TaskStatus::Skipped, Some("ignored"));
                outcome.ignored += 1;
                continue;
            }

            if self.dry_run {
                self.log
                    .dry_run(&format!("would install {}: {}", package.name, package.command));
                self.log.record_task(&package.name, TaskStatus::DryRun, None);
                outcome.dry_run += 1;
                continue;
            }

            self.log.stage(&format!("Installing {}", package.name));
            let mut env = base_env.clone();
            env.push((PACKAGE_ENV.to_string(), package.name.clone()));

            match self.executor.run_shell(&package.command, &env) {
                Ok(status) if status.interrupted => {
                    self.log
                        .record_task(&package.name, TaskStatus::Failed, Some("interrupted"));
                    return Err(InstallError::Interrupted {
                        package: package.name.clone(),
                    });
                }
                Ok(status) if status.success => {
                    self.log.record_task(&package.name, TaskStatus::Ok, None);
                    outcome.installed += 1;
                }
                Ok(status) => {
                    let detail = status
                        .code
                        .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit {c}"));
                    self.log
                        .error(&format!("{} failed ({detail})", package.name));
                    self.log
                        .record_task(&package.name, TaskStatus::Failed, Some(&detail));
                    outcome.failed += 1;
                }
                Err(e) => {
                    self.log.error(&format!("{}: {e:#}", package.name));
                    self.log
                        .record_task(&package.name, TaskStatus::Failed, Some("not started"));
                    outcome.failed += 1;
                }
            }

            self.check_interrupt(&package.name)?;
        }
        Ok(outcome)
    }

    fn check_interrupt(&self, package: &str) -> Result<(), InstallError> {
        if self.interrupted.load(Ordering::SeqCst) {
            return Err(InstallError::Interrupted {
                package: package.to_string(),
            });
        }
        Ok(())
    }
}

fn env_pairs(vars: &[EnvVar]) -> Vec<(String, String)> {
    vars.iter()
        .map(|v| (v.name.clone(), v.value.clone()))
        .collect()
}

/// Run `neofetch` if it is installed. Failures are only logged.
pub fn show_system_info(executor: &dyn Executor, log: &dyn Log) {
    if !cfg!(target_os = "linux") || !executor.which("neofetch") {
        return;
    }
    match executor.run_shell("neofetch", &[]) {
        Ok(status) if !status.success => log.debug("neofetch exited unsuccessfully"),
        Ok(_) => {}
        Err(e) => log.debug(&format!("neofetch: {e:#}")),
    }
}

/// Logged once every package command has succeeded.
pub const SUCCESS_MESSAGE: &str = "Installation successful";

/// Close a finished run: fail if any package failed, otherwise show system
/// info and log [`SUCCESS_MESSAGE`]. A dry run only checks for failures.
///
/// # Errors
///
/// Returns [`InstallError::Failed`] with the number of failed packages.
pub fn finish(
    outcome: Outcome,
    dry_run: bool,
    executor: &dyn Executor,
    log: &dyn Log,
) -> Result<(), InstallError> {
    if outcome.failed > 0 {
        return Err(InstallError::Failed(outcome.failed));
    }
    if !dry_run {
        show_system_info(executor, log);
        log.info(SUCCESS_MESSAGE);
    }
    Ok(())
}

/// Run the install command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the prompt
/// cannot be read, the run is interrupted, or any package fails.
pub fn run(global: &GlobalOpts, opts: &InstallOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let ignore = IgnoreList::from(opts.ignore.clone());
    list::print_listing(&setup.config.packages, &ignore, log);

    if !(opts.yes || global.dry_run) && !confirm()? {
        log.warn("Installation cancelled");
        return Ok(());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        log.debug(&format!("interrupt handler not installed: {e}"));
    }

    log.stage("Beginning installation");
    let executor = SystemExecutor;
    let installer = Installer::new(&executor, log, global.dry_run, &interrupted);
    let result = installer.install(&setup.config, &ignore);
    log.print_summary();

    finish(result?, global.dry_run, &executor, log)?;
    Ok(())
}
