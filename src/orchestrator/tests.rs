// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Orchestrator;
use crate::error::{OrchestrationError, ProcessError};
use crate::patterns::{CommandKind, Options};
use crate::test_utils::RecordingRunner;

fn options(command: CommandKind, dry_run: bool) -> Options {
    Options::builder()
        .both_cases(true)
        .dry_run(dry_run)
        .command(command)
        .build()
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("output should be utf-8")
}

#[test]
fn test_dry_run_prints_one_line_per_token() {
    let runner = RecordingRunner::new();
    let orchestrator = Orchestrator::new(&runner);
    let mut out = Vec::new();

    orchestrator
        .run(
            &["mp3", "mp4"],
            &options(CommandKind::LfsTrack, true),
            &mut out,
        )
        .expect("dry run should succeed");

    insta::assert_snapshot!(output(out).trim_end(), @r"
    DRY RUN: git lfs track *.mp3 *.MP3
    DRY RUN: git lfs track *.mp4 *.MP4
    ");
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_dry_run_never_invokes_runner_even_if_it_would_fail() {
    let runner = RecordingRunner::new().failing_on("*.pdf", 1);
    let orchestrator = Orchestrator::new(&runner);
    let mut out = Vec::new();

    let result = orchestrator.run(
        &["pdf", "zip", "psd"],
        &options(CommandKind::LfsUntrack, true),
        &mut out,
    );

    assert!(result.is_ok());
    assert_eq!(runner.call_count(), 0);
    assert_eq!(output(out).lines().count(), 3);
}

#[test]
fn test_dry_run_with_no_tokens_prints_nothing() {
    let runner = RecordingRunner::new();
    let mut out = Vec::new();

    Orchestrator::new(&runner)
        .run::<&str>(&[], &options(CommandKind::LsFiles, true), &mut out)
        .expect("dry run should succeed");

    assert!(out.is_empty());
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_live_runs_one_invocation_per_token_in_order() {
    let runner = RecordingRunner::new();
    let orchestrator = Orchestrator::new(&runner);
    let mut out = Vec::new();

    orchestrator
        .run(
            &["pdf", "ZIP"],
            &options(CommandKind::LfsTrack, false),
            &mut out,
        )
        .expect("live run should succeed");

    assert_eq!(
        runner.command_lines(),
        ["git lfs track *.pdf *.PDF", "git lfs track *.zip *.ZIP"]
    );
    assert!(out.is_empty());
}

#[test]
fn test_live_without_tokens_runs_bare_command() {
    let runner = RecordingRunner::new();
    let mut out = Vec::new();

    Orchestrator::new(&runner)
        .run::<String>(&[], &options(CommandKind::LfsLsFiles, false), &mut out)
        .expect("bare listing should succeed");

    assert_eq!(runner.command_lines(), ["git lfs ls-files"]);
}

#[test]
fn test_live_bare_command_failure() {
    let runner = RecordingRunner::new().failing_on("ls-files", 128);
    let mut out = Vec::new();

    let err = Orchestrator::new(&runner)
        .run::<String>(&[], &options(CommandKind::LsFiles, false), &mut out)
        .unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"git ls-files failed: process 'git ls-files' exited with code 128"
    );
}

#[test]
fn test_live_stops_at_first_failure() {
    let runner = RecordingRunner::new().failing_on("*.pdf", 1);
    let orchestrator = Orchestrator::new(&runner);
    let mut out = Vec::new();

    let err = orchestrator
        .run(
            &["pdf", "zip"],
            &options(CommandKind::LfsTrack, false),
            &mut out,
        )
        .unwrap_err();

    assert_eq!(err.token(), Some("pdf"));
    assert!(matches!(
        err,
        OrchestrationError::InvocationFailed {
            source: ProcessError::NonZeroExit { code: 1, .. },
            ..
        }
    ));
    assert_eq!(runner.command_lines(), ["git lfs track *.pdf *.PDF"]);
}

#[test]
fn test_live_failure_after_earlier_successes() {
    let runner = RecordingRunner::new().failing_on("*.ZIP", 2);
    let orchestrator = Orchestrator::new(&runner);
    let mut out = Vec::new();

    let err = orchestrator
        .run(
            &["pdf", "zip", "psd"],
            &options(CommandKind::LfsUntrack, false),
            &mut out,
        )
        .unwrap_err();

    assert_eq!(err.token(), Some("zip"));
    assert_eq!(runner.call_count(), 2);
}

#[test]
fn test_custom_git_program() {
    let runner = RecordingRunner::new();
    let orchestrator = Orchestrator::new(&runner).with_git_program("/opt/git/bin/git");
    let mut out = Vec::new();

    orchestrator
        .run(&["iso"], &options(CommandKind::LsFiles, false), &mut out)
        .expect("live run should succeed");

    assert_eq!(
        orchestrator.git_program(),
        std::path::Path::new("/opt/git/bin/git")
    );
    assert_eq!(
        runner.command_lines(),
        ["/opt/git/bin/git ls-files *.iso *.ISO"]
    );
}

#[test]
fn test_dry_run_label_ignores_git_program() {
    let runner = RecordingRunner::new();
    let orchestrator = Orchestrator::new(&runner).with_git_program("/opt/git/bin/git");
    let mut out = Vec::new();

    orchestrator
        .run(&["iso"], &options(CommandKind::LsFiles, true), &mut out)
        .expect("dry run should succeed");

    assert_eq!(output(out), "DRY RUN: git ls-files *.iso *.ISO\n");
}
