//! Domain-specific error types for arcus.
//!
//! Internal modules return typed errors ([`ConfigError`], [`InstallError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ConfigError    config directory/file lookup, I/O, empty entry files
//! InstallError   interrupted or failed package installation
//! ```
//!
//! Parse irregularities are not errors: the entry parser reports them as
//! [`Diagnostic`](crate::config::arcus::Diagnostic)s and keeps going.

use thiserror::Error;

/// Errors that arise from locating and loading the entry files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `arcus_config` directory does not exist.
    #[error("Config directory not found: {0}")]
    MissingDirectory(String),

    /// An entry file is absent from the config directory.
    #[error("Config file not found: {0}")]
    MissingFile(String),

    /// An I/O error occurred while opening an entry file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file parsed to zero entries.
    #[error("No entries parsed from {0}")]
    NoEntries(String),
}

/// Errors that arise while installing packages.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The user interrupted the run (Ctrl-C) or a command was stopped by one.
    #[error("Installation interrupted while installing '{package}'")]
    Interrupted {
        /// Package being installed (or next in line) when the run stopped.
        package: String,
    },

    /// One or more install commands failed.
    #[error("{0} package(s) failed to install")]
    Failed(usize),
}
