//! Command: list the packages in `arcus.pkgs`.
use anyhow::Result;

use super::{CommandSetup, IgnoreList};
use crate::cli::{GlobalOpts, ListOpts};
use crate::config::packages::Package;
use crate::logging::{Log, Logger};

/// Render one line per package, then the ignore count.
///
/// The count is the number of names given to `--ignore`, whether or not
/// they match a package.
#[must_use]
pub fn listing_lines(packages: &[Package], ignore: &IgnoreList) -> Vec<String> {
    let mut lines: Vec<String> = packages
        .iter()
        .map(|package| {
            let suffix = if ignore.contains(&package.name) {
                " [IGNORED]"
            } else {
                ""
            };
            format!("[{}]: {}{suffix}", package.source(), package.name)
        })
        .collect();

    lines.push(match ignore.len() {
        0 => "0 package(s) ignored, see \"arcus --help\"".to_string(),
        1 => "1 package ignored".to_string(),
        n => format!("{n} package(s) ignored"),
    });
    lines
}

/// Log the package listing under a stage header.
pub fn print_listing(packages: &[Package], ignore: &IgnoreList, log: &dyn Log) {
    log.stage("Packages to install");
    for line in listing_lines(packages, ignore) {
        log.info(&line);
    }
}

/// Line that follows the listing of the `list` command.
pub const INSTALL_HINT: &str = "Run \"arcus install --ignore ...\" to install packages";

/// Log the listing followed by [`INSTALL_HINT`].
pub fn list_packages(packages: &[Package], ignore: &IgnoreList, log: &dyn Log) {
    print_listing(packages, ignore, log);
    log.info(INSTALL_HINT);
}

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(global: &GlobalOpts, opts: &ListOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let ignore = IgnoreList::from(opts.ignore.clone());
    list_packages(&setup.config.packages, &ignore, log);
    Ok(())
}
