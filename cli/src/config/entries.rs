//! Loading Arcus entry files from disk into typed records.
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::arcus::{Diagnostic, EntryParser, Pair, Parsed};
use crate::error::ConfigError;

/// A tolerated irregularity in an entry file, tied to its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// File name the warning came from (e.g. `"arcus.pkgs"`).
    pub source: String,
    /// 1-based line number.
    pub line: usize,
    /// Human-readable warning message.
    pub message: String,
}

impl ConfigWarning {
    fn from_diagnostic(source: &str, diagnostic: &Diagnostic) -> Self {
        Self {
            source: source.to_string(),
            line: diagnostic.line(),
            message: diagnostic.to_string(),
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.source, self.line, self.message)
    }
}

/// Records loaded from one entry file, plus anything the parser tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    /// Records in file order.
    pub items: Vec<T>,
    /// Parser warnings for this file.
    pub warnings: Vec<ConfigWarning>,
}

/// Open `path` and run it through the entry parser.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `path` is not a file, or
/// [`ConfigError::Io`] if it cannot be opened.
pub fn parse_file(path: &Path) -> Result<Parsed, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::MissingFile(path.display().to_string()));
    }
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(EntryParser::default().parse(Some(BufReader::new(file))))
}

/// Load an entry file, converting each pair via [`From<Pair>`].
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, or
/// [`ConfigError::NoEntries`] if it yields no pairs at all.
pub fn load<T: From<Pair>>(path: &Path) -> Result<Loaded<T>, ConfigError> {
    let parsed = parse_file(path)?;
    let source = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let warnings: Vec<ConfigWarning> = parsed
        .diagnostics
        .iter()
        .map(|d| ConfigWarning::from_diagnostic(&source, d))
        .collect();

    if parsed.pairs.is_empty() {
        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        return Err(ConfigError::NoEntries(path.display().to_string()));
    }

    Ok(Loaded {
        items: parsed.pairs.into_iter().map(T::from).collect(),
        warnings,
    })
}
