// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for unit tests.

use std::cell::RefCell;

use crate::core::process::{CommandRunner, Invocation};
use crate::error::ProcessError;

/// Runner that records invocations instead of spawning them.
///
/// An invocation fails when one of its arguments equals a registered needle.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    failures: Vec<(String, i32)>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fails any invocation carrying `arg` with exit code `code`.
    pub(crate) fn failing_on(mut self, arg: &str, code: i32) -> Self {
        self.failures.push((arg.to_string(), code));
        self
    }

    pub(crate) fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push(invocation.clone());
        let failure = self
            .failures
            .iter()
            .find(|(arg, _)| invocation.args_slice().iter().any(|a| a == arg));
        match failure {
            Some((_, code)) => Err(ProcessError::NonZeroExit {
                command: invocation.command_line(),
                code: *code,
            }),
            None => Ok(()),
        }
    }
}
