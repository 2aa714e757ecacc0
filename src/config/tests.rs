// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;

fn temp_toml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    write!(file, "{contents}").expect("failed to write temp file");
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, None);
    assert!(!config.patterns.both_cases);
    assert!(!config.patterns.everywhere);
    assert_eq!(
        config.unmigrate.commit_message,
        "Restore patterns to Git from Git LFS"
    );
    assert_eq!(config.tools.git, PathBuf::from("git"));
}

#[test]
fn test_empty_loader_matches_default() {
    let config = ConfigLoader::default().build().expect("build should succeed");
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_parse() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_file = "logs/lfs.log"

[patterns]
both_cases = true

[unmigrate]
commit_message = "Move audio back to Git"

[tools]
git = "/usr/local/bin/git"
"#,
    )
    .expect("parse should succeed");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/lfs.log")));
    assert!(config.patterns.both_cases);
    assert!(!config.patterns.everywhere);
    assert_eq!(config.unmigrate.commit_message, "Move audio back to Git");
    assert_eq!(config.tools.git, PathBuf::from("/usr/local/bin/git"));
}

#[test]
fn test_format_options() {
    let config = Config::parse("[global]\nlog_file = \"lfs.log\"\n[patterns]\neverywhere = true")
        .expect("parse should succeed");

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.file_log_level    = 5
    global.log_file          = lfs.log
    global.output_log_level  = 2
    patterns.both_cases      = false
    patterns.everywhere      = true
    tools.git                = git
    unmigrate.commit_message = Restore patterns to Git from Git LFS
    ");
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let result = Config::parse("[task]\nenabled = true");
    assert!(result.is_err());
}

#[test]
fn test_deny_unknown_fields_in_section() {
    let result = Config::parse("[patterns]\nignore_case = true");
    assert!(result.is_err());
}

#[test]
fn test_log_level_out_of_range() {
    let result = Config::parse("[global]\noutput_log_level = 9");
    assert!(result.is_err());
}

#[test]
fn test_file_log_level_out_of_range_names_no_other_key() {
    let err = Config::parse("[global]\nfile_log_level = 9").unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("log level must be 0-6, got 9"), "{message}");
    assert!(!message.contains("output_log_level"), "{message}");
}

#[test]
fn test_empty_commit_message_rejected() {
    let err = Config::parse("[unmigrate]\ncommit_message = \"  \"").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'commit_message' in section '[unmigrate]': must not be empty"
    );
}

#[test]
fn test_empty_git_path_rejected() {
    let result = Config::parse("[tools]\ngit = \"\"");
    assert!(result.is_err());
}

#[test]
fn test_config_loader_add_toml_file_success() {
    let file = temp_toml("[patterns]\neverywhere = true\n");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert!(config.patterns.everywhere);
}

#[test]
fn test_config_from_file() {
    let file = temp_toml("[tools]\ngit = \"git2\"\n");

    let config = Config::from_file(file.path()).expect("load should succeed");

    assert_eq!(config.tools.git, PathBuf::from("git2"));
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/config.toml")
        .build();

    let message = result.unwrap_err().to_string();
    assert!(
        message.starts_with("failed to parse config file '/nonexistent/path/to/config.toml'"),
        "{message}"
    );
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    let file = temp_toml("this is not valid toml {{{{{{");

    let result = ConfigLoader::new().add_toml_file(file.path()).build();

    assert!(result.is_err(), "build should fail with invalid TOML");
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/path.toml");

    assert!(loader.loaded_files().is_empty());
    assert_eq!(loader.build().expect("missing optional file is fine"), Config::default());
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[patterns]\n both_cases = true")
        .add_toml_file_optional("/nonexistent/optional.toml")
        .add_toml_str("[patterns]\n everywhere = true");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [string] <string>
    ");
}

#[test]
fn test_config_loader_layered_sources() {
    let file = temp_toml(
        r#"
[patterns]
both_cases = true

[unmigrate]
commit_message = "From file"
"#,
    );

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[unmigrate]\ncommit_message = \"From string\"")
        .build()
        .expect("build should succeed");

    assert!(config.patterns.both_cases, "file value should persist");
    assert_eq!(
        config.unmigrate.commit_message, "From string",
        "later source should override"
    );
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 1")
        .set("global.output_log_level", 5_i64)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("GLPTEST_PATTERNS__EVERYWHERE", "true");
        std::env::set_var("GLPTEST_UNMIGRATE__COMMIT_MESSAGE", "From env");
    }

    let result = ConfigLoader::new()
        .add_toml_str("[patterns]\neverywhere = false")
        .with_env_prefix("GLPTEST")
        .build();

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("GLPTEST_PATTERNS__EVERYWHERE");
        std::env::remove_var("GLPTEST_UNMIGRATE__COMMIT_MESSAGE");
    }

    let config = result.expect("build should succeed");
    assert!(config.patterns.everywhere, "env var should override TOML value");
    assert_eq!(config.unmigrate.commit_message, "From env");
}

#[test]
fn test_config_loader_build_deserialization_error() {
    let result = ConfigLoader::new()
        .add_toml_str("[patterns]\nboth_cases = \"sometimes\"")
        .build();

    let err_str = result.unwrap_err().to_string();
    assert!(
        err_str.starts_with("failed to parse config file '<string>'"),
        "{err_str}"
    );
}
