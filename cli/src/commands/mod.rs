//! Subcommand implementations.
pub mod install;
pub mod list;
pub mod version;

use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::logging::Log;

/// Environment variable naming the directory that holds `arcus_config/`.
pub const ROOT_ENV: &str = "ARCUS_ROOT";

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Loaded configuration.
    pub config: Config,
}

impl CommandSetup {
    /// Resolve the root and load both entry files, logging any parser
    /// warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or the
    /// configuration fails to load.
    pub fn init(global: &GlobalOpts, log: &dyn Log) -> Result<Self> {
        let root = resolve_root(global)?;

        log.stage("Loading configuration");
        log.debug(&format!("root: {}", root.display()));
        let config = Config::load(&root)?;

        log.info(&format!(
            "loaded {} packages, {} environment variables",
            config.packages.len(),
            config.env_vars.len()
        ));

        if !config.warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                config.warnings.len()
            ));
            for warning in &config.warnings {
                log.warn(&format!("  {warning}"));
            }
        }

        Ok(Self { config })
    }
}

/// Resolve the root directory: `--root`, then `$ARCUS_ROOT`, then the
/// current directory.
///
/// # Errors
///
/// Returns an error if the fallback current directory cannot be read.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(root) = pick_root(global.root.as_deref(), std::env::var_os(ROOT_ENV)) {
        return Ok(root);
    }
    std::env::current_dir().context("cannot determine current directory")
}

/// An empty `$ARCUS_ROOT` counts as unset.
fn pick_root(flag: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Package names given to `--ignore`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    names: Vec<String>,
}

impl IgnoreList {
    /// Whether `name` was given, compared exactly.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of names given, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names were given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for IgnoreList {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl FromIterator<String> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Root resolution
    // -----------------------------------------------------------------------

    #[test]
    fn flag_wins_over_env() {
        let root = pick_root(Some(Path::new("/from/flag")), Some("/from/env".into()));
        assert_eq!(root, Some(PathBuf::from("/from/flag")));
    }

    #[test]
    fn env_used_without_flag() {
        let root = pick_root(None, Some("/from/env".into()));
        assert_eq!(root, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_env_is_unset() {
        assert_eq!(pick_root(None, Some(OsString::new())), None);
        assert_eq!(pick_root(None, None), None);
    }

    #[test]
    fn resolve_root_prefers_flag() {
        let global = GlobalOpts {
            root: Some(PathBuf::from("/tmp/arcus-root")),
            ..GlobalOpts::default()
        };
        assert_eq!(resolve_root(&global).unwrap(), PathBuf::from("/tmp/arcus-root"));
    }

    // -----------------------------------------------------------------------
    // IgnoreList
    // -----------------------------------------------------------------------

    #[test]
    fn ignore_matches_exactly() {
        let ignore = IgnoreList::from(vec!["git".to_string(), "neovim".to_string()]);
        assert!(ignore.contains("git"));
        assert!(ignore.contains("neovim"));
        assert!(!ignore.contains("Git"));
        assert!(!ignore.contains("gi"));
        assert!(!ignore.contains("git-lfs"));
    }

    #[test]
    fn ignore_len_counts_duplicates() {
        let ignore: IgnoreList = ["a", "a", "b"].into_iter().map(String::from).collect();
        assert_eq!(ignore.len(), 3);
        assert!(!ignore.is_empty());
        assert!(IgnoreList::default().is_empty());
    }
}
