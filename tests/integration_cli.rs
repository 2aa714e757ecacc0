// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests running the installed front ends.
//!
//! Only dry runs and usage errors are exercised: neither needs git.

use std::path::Path;
use std::process::{Command, Output};

fn run_bin(bin: &str, args: &[&str], cwd: &Path) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env_remove("GIT_LFS_PATTERNS_PATTERNS__BOTH_CASES")
        .env_remove("GIT_LFS_PATTERNS_PATTERNS__EVERYWHERE")
        .output()
        .expect("failed to run front end")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Dry runs
// =============================================================================

#[test]
fn cli_track_dry_run() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(
        env!("CARGO_BIN_EXE_git-lfs-track"),
        &["-dce", "mp3", "mp4"],
        temp.path(),
    );

    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output).trim_end(), @r"
    DRY RUN: git lfs track *.mp3 *.MP3 **/*.mp3 **/*.MP3
    DRY RUN: git lfs track *.mp4 *.MP4 **/*.mp4 **/*.MP4
    ");
}

#[test]
fn cli_ls_files_dry_run_long_flags() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(
        env!("CARGO_BIN_EXE_git-ls-files"),
        &["--dry-run", "--case", "JPG"],
        temp.path(),
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "DRY RUN: git ls-files *.jpg *.JPG\n");
}

#[test]
fn cli_lfs_files_dry_run_without_patterns_prints_nothing() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(env!("CARGO_BIN_EXE_git-lfs-files"), &["-d"], temp.path());

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_untrack_dry_run_reads_local_config() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(
        temp.path().join(".git-lfs-patterns.toml"),
        "[patterns]\neverywhere = true\n",
    )
    .expect("write config");

    let output = run_bin(
        env!("CARGO_BIN_EXE_git-lfs-untrack"),
        &["-d", "psd"],
        temp.path(),
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "DRY RUN: git lfs untrack *.psd **/*.psd\n");
}

// =============================================================================
// Usage errors and help
// =============================================================================

#[test]
fn cli_track_without_patterns_fails_with_help() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(env!("CARGO_BIN_EXE_git-lfs-track"), &["-d"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("Usage: git-lfs-track"), "{err}");
    assert!(
        err.contains("Error: git-lfs-track requires at least one pattern"),
        "{err}"
    );
}

#[test]
fn cli_unmigrate_without_patterns_fails_before_preflight() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(env!("CARGO_BIN_EXE_git-unmigrate"), &[], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: git-unmigrate requires at least one pattern"));
}

#[test]
fn cli_unmigrate_outside_repository() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(
        env!("CARGO_BIN_EXE_git-unmigrate"),
        &["-d", "mp3"],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Error: not a git repository"));
}

#[test]
fn cli_help_exits_zero() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(env!("CARGO_BIN_EXE_git-unmigrate"), &["--help"], temp.path());

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("Move matching files from Git LFS back to Git"));
    assert!(help.contains("DRY RUN: git push"));
}

#[test]
fn cli_version_exits_zero() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(env!("CARGO_BIN_EXE_git-ls-files"), &["-V"], temp.path());

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_unknown_flag_exits_one() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_bin(env!("CARGO_BIN_EXE_git-lfs-track"), &["-x", "zip"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_bad_config_file_exits_one() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(temp.path().join("bad.toml"), "[patterns]\nwhatever = 1\n")
        .expect("write config");

    let output = run_bin(
        env!("CARGO_BIN_EXE_git-lfs-track"),
        &["--config", "bad.toml", "-d", "zip"],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load config"));
}
