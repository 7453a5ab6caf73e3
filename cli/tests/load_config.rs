#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Integration tests for loading `arcus_config/` from disk.

mod common;

use arcus_cli::commands::CommandSetup;
use arcus_cli::config::packages::PackageSource;
use arcus_cli::config::{Config, ENVS_FILE, PACKAGES_FILE};
use arcus_cli::error::ConfigError;

use common::{IntegrationTestContext, RecordingLog, TestContextBuilder};

#[test]
fn sample_root_loads_in_file_order() {
    let ctx = IntegrationTestContext::new();
    let config = ctx.load_config();

    let names: Vec<&str> = config.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["git", "code", "spotify", "oh-my-zsh", "rustup"]);
    assert_eq!(config.packages[0].command, "sudo $PACMAN -S --noconfirm git");
    assert_eq!(config.env_vars[1].name, "YAY");
    assert_eq!(config.env_vars[1].value, "yay --noconfirm");
    assert!(config.warnings.is_empty());
}

#[test]
fn sample_packages_cover_every_source() {
    let config = IntegrationTestContext::new().load_config();
    let sources: Vec<PackageSource> = config.packages.iter().map(|p| p.source()).collect();
    assert_eq!(
        sources,
        [
            PackageSource::Pacman,
            PackageSource::YayAur,
            PackageSource::Flatpak,
            PackageSource::GitHub,
            PackageSource::SelfDefined,
        ]
    );
}

#[test]
fn crlf_file_has_no_entries() {
    let ctx = TestContextBuilder::new()
        .with_config_file(ENVS_FILE, "{\r\n\"A\",\r\n\"1\"\r\n}\r\n")
        .build();
    let err = Config::load(ctx.root_path()).unwrap_err();
    assert!(matches!(err, ConfigError::NoEntries(_)));
}

#[test]
fn missing_packages_file_is_reported() {
    let ctx = TestContextBuilder::new()
        .without_config_file(PACKAGES_FILE)
        .build();
    let err = Config::load(ctx.root_path()).unwrap_err();
    assert!(err.to_string().starts_with("Config file not found"));
}

#[test]
fn parse_stops_at_closing_marker() {
    let ctx = TestContextBuilder::new()
        .with_config_file(
            PACKAGES_FILE,
            "{\n\"only\",\n\"make\"\n}\n{\n\"after\",\n\"make\"\n}\n",
        )
        .build();
    let config = ctx.load_config();
    assert_eq!(config.packages.len(), 1);
    assert_eq!(config.packages[0].name, "only");
}

#[test]
fn setup_logs_warnings() {
    let ctx = TestContextBuilder::new()
        .with_config_file(
            ENVS_FILE,
            "# environment\n{\n\"EDITOR\",\n\"nvim\"\n},\n\"DANGLING\",\n}\n",
        )
        .build();
    let log = RecordingLog::default();
    let setup = CommandSetup::init(&ctx.global_opts(false), &log).unwrap();

    assert_eq!(setup.config.env_vars.len(), 1);
    let warnings = log.at("warn");
    assert_eq!(warnings[0], "found 2 configuration warning(s):");
    assert!(warnings[1].contains("arcus.envs:1:"));
    assert!(warnings[2].contains("key 'DANGLING' has no value"));
    assert_eq!(log.at("stage"), ["Loading configuration"]);
}

#[test]
fn setup_reports_counts_once() {
    let ctx = IntegrationTestContext::new();
    let log = RecordingLog::default();
    CommandSetup::init(&ctx.global_opts(false), &log).unwrap();

    assert_eq!(log.at("info"), ["loaded 5 packages, 2 environment variables"]);
    let debug = log.at("debug");
    assert_eq!(debug.len(), 1);
    assert!(debug[0].starts_with("root: "));
}

#[test]
fn setup_fails_without_config_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let global = arcus_cli::cli::GlobalOpts {
        root: Some(tmp.path().to_path_buf()),
        dry_run: false,
    };
    let err = CommandSetup::init(&global, &RecordingLog::default()).unwrap_err();
    assert!(err.to_string().starts_with("Config directory not found"));
}
