//! Configuration loaded from the `arcus_config/` directory.
pub mod arcus;
pub mod entries;
pub mod envs;
pub mod packages;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Directory under the root that holds the entry files.
pub const CONFIG_DIR: &str = "arcus_config";
/// Package entry file name.
pub const PACKAGES_FILE: &str = "arcus.pkgs";
/// Environment variable entry file name.
pub const ENVS_FILE: &str = "arcus.envs";

/// Everything loaded from the config directory.
#[derive(Debug)]
pub struct Config {
    /// Root the config directory was found under.
    pub root: PathBuf,
    /// Packages in file order.
    pub packages: Vec<packages::Package>,
    /// Environment variables in file order.
    pub env_vars: Vec<envs::EnvVar>,
    /// Parser warnings from both files.
    pub warnings: Vec<entries::ConfigWarning>,
}

impl Config {
    /// Load `arcus.pkgs` and `arcus.envs` from `<root>/arcus_config/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or either file is missing or
    /// unreadable, or if either file has no entries.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let conf = root.join(CONFIG_DIR);
        if !conf.is_dir() {
            return Err(ConfigError::MissingDirectory(conf.display().to_string()));
        }

        let packages = packages::load(&conf.join(PACKAGES_FILE))?;
        let env_vars = envs::load(&conf.join(ENVS_FILE))?;

        let mut warnings = packages.warnings;
        warnings.extend(env_vars.warnings);

        Ok(Self {
            root: root.to_path_buf(),
            packages: packages.items,
            env_vars: env_vars.items,
            warnings,
        })
    }
}
