//! Environment variable entries.
use std::path::Path;

use super::arcus::Pair;
use super::entries::{self, Loaded};
use crate::error::ConfigError;

/// An environment variable handed to every install command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    /// Variable name.
    pub name: String,
    /// Variable value, used verbatim.
    pub value: String,
}

impl From<Pair> for EnvVar {
    fn from(pair: Pair) -> Self {
        Self {
            name: pair.key,
            value: pair.value,
        }
    }
}

/// Load environment variables from `arcus.envs`.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or has no entries.
pub fn load(path: &Path) -> Result<Loaded<EnvVar>, ConfigError> {
    entries::load(path)
}
