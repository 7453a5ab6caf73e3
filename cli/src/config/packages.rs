//! Package install entries.
use std::fmt;
use std::path::Path;

use super::arcus::Pair;
use super::entries::{self, Loaded};
use crate::error::ConfigError;

/// A package to install: a name and the shell command that installs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name, matched against `--ignore`.
    pub name: String,
    /// Shell command run to install the package.
    pub command: String,
}

impl From<Pair> for Package {
    fn from(pair: Pair) -> Self {
        Self {
            name: pair.key,
            command: pair.value,
        }
    }
}

impl Package {
    /// Where the install command fetches the package from.
    #[must_use]
    pub fn source(&self) -> PackageSource {
        PackageSource::classify(&self.command)
    }
}

/// Install channel inferred from a package's command, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSource {
    /// Command mentions `PACMAN`.
    Pacman,
    /// Command mentions `YAY`.
    YayAur,
    /// Command runs `flatpak install`.
    Flatpak,
    /// Command clones from git or mentions github.
    GitHub,
    /// Anything else.
    SelfDefined,
}

impl PackageSource {
    /// Classify an install command. Earlier rules win.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcus_cli::config::packages::PackageSource;
    ///
    /// assert_eq!(PackageSource::classify("$PACMAN -S git"), PackageSource::Pacman);
    /// assert_eq!(PackageSource::classify("./install.sh"), PackageSource::SelfDefined);
    /// ```
    #[must_use]
    pub fn classify(command: &str) -> Self {
        if command.contains("PACMAN") {
            Self::Pacman
        } else if command.contains("YAY") {
            Self::YayAur
        } else if command.contains("flatpak install") {
            Self::Flatpak
        } else if command.contains("git clone") || command.contains("github") {
            Self::GitHub
        } else {
            Self::SelfDefined
        }
    }

    /// Upper-case tag shown in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pacman => "PACMAN",
            Self::YayAur => "YAY-AUR",
            Self::Flatpak => "FLATPAK",
            Self::GitHub => "GITHUB",
            Self::SelfDefined => "SELF-DEFINED",
        }
    }
}

impl fmt::Display for PackageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Load packages from `arcus.pkgs`.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or has no entries.
pub fn load(path: &Path) -> Result<Loaded<Package>, ConfigError> {
    entries::load(path)
}
