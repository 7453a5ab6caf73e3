//! Arcus package installer.
//!
//! Reads package install commands and environment variables from the
//! Arcus entry files in `arcus_config/` and runs them through the shell.
//!
//! - **[`config`]**: the Arcus entry parser and the typed config loader
//! - **[`exec`]**: running install commands behind the [`exec::Executor`] seam
//! - **[`commands`]**: `list`, `install`, and `version`
//! - **[`logging`]**: console and file logging through [`tracing`]
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
