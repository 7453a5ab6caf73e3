//! Command-line entry point for the `arcus` binary.
use std::process::ExitCode;

use anyhow::Result;
use arcus_cli::cli::{Cli, Command};
use arcus_cli::error::InstallError;
use arcus_cli::{commands, logging};
use clap::Parser;

/// Exit code used when the user interrupts an install.
const INTERRUPTED_EXIT: u8 = 2;

fn main() -> Result<ExitCode> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    let result = match &args.command {
        Command::List(opts) => {
            let log = start_logging(&args);
            commands::list::run(&args.global, opts, &log)
        }
        Command::Install(opts) => {
            let log = start_logging(&args);
            commands::install::run(&args.global, opts, &log)
        }
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if matches!(e.downcast_ref::<InstallError>(), Some(InstallError::Interrupted { .. })) => {
            tracing::error!("{e}");
            Ok(ExitCode::from(INTERRUPTED_EXIT))
        }
        Err(e) => Err(e),
    }
}

fn start_logging(args: &Cli) -> logging::Logger {
    let command = args.command.name();
    logging::init_subscriber(args.verbose, command);
    logging::Logger::new(command)
}
