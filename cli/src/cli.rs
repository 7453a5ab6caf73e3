//! Command-line argument definitions.
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for arcus.
#[derive(Parser, Debug)]
#[command(
    name = "arcus",
    about = "Install packages and scripts listed in Arcus entry files",
    version = crate::commands::version::version()
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Directory containing arcus_config/ (defaults to $ARCUS_ROOT, then the current directory)
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Log the install commands instead of running them
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the packages that would be installed
    List(ListOpts),
    /// Run the install command of every package (may require root)
    Install(InstallOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file and the subscriber.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Install(_) => "install",
            Self::Version => "version",
        }
    }
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct ListOpts {
    /// Packages to mark as ignored (space or comma separated)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub ignore: Vec<String>,
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct InstallOpts {
    /// Packages to skip (space or comma separated)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list() {
        let cli = Cli::parse_from(["arcus", "list"]);
        assert!(matches!(cli.command, Command::List(ref o) if o.ignore.is_empty()));
        assert_eq!(cli.command.name(), "list");
    }

    #[test]
    fn parse_ignore_space_separated() {
        let cli = Cli::parse_from(["arcus", "list", "--ignore", "git", "neovim"]);
        assert!(
            matches!(&cli.command, Command::List(o) if o.ignore == ["git", "neovim"]),
            "{:?}",
            cli.command
        );
    }

    #[test]
    fn parse_ignore_comma_separated() {
        let cli = Cli::parse_from(["arcus", "install", "--ignore", "git,neovim"]);
        assert!(matches!(&cli.command, Command::Install(_)), "Expected Install command");
        if let Command::Install(opts) = cli.command {
            assert_eq!(opts.ignore, vec!["git", "neovim"]);
            assert!(!opts.yes);
        }
    }

    #[test]
    fn parse_install_yes() {
        let cli = Cli::parse_from(["arcus", "install", "-y"]);
        assert!(matches!(cli.command, Command::Install(ref o) if o.yes));
    }

    #[test]
    fn parse_dry_run_short() {
        let cli = Cli::parse_from(["arcus", "-d", "install"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_global_after_subcommand() {
        let cli = Cli::parse_from(["arcus", "install", "--dry-run", "--root", "/tmp/r"]);
        assert!(cli.global.dry_run);
        assert_eq!(cli.global.root, Some(std::path::PathBuf::from("/tmp/r")));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["arcus", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn version_flag_matches_version_command() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(crate::commands::version::version()));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["arcus", "-v", "list"]);
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["arcus", "uninstall"]).is_err());
    }
}
