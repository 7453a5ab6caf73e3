//! Command: print version information.

/// Version baked in by `build.rs`, else the package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("ARCUS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the arcus version and license line to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("arcus {}", version());
    println!("This program may be freely redistributed under the terms of the GNU General Public License.");
}
