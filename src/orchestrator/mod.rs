// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-token execution.
//!
//! ```text
//! run(tokens, options, out)
//!        |
//!   dry_run? --yes--> for token: writeln(out, dry_run_line(label, expand(token)))
//!        |                        runner untouched, always Ok
//!        no
//!        |
//!   tokens empty? --yes--> one bare invocation (list everything)
//!        |
//!        no
//!        |
//!   for token (in order):
//!     expand(token) --> Invocation git <args> <globs> --> runner.run()
//!     Err --> InvocationFailed { token } and stop
//! ```
//!
//! Tokens run strictly one after another so dry-run order matches live order
//! and children never interleave on the shared terminal.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::process::CommandRunner;
use crate::error::OrchestrationError;
use crate::patterns::command::DEFAULT_GIT;
use crate::patterns::{Options, dry_run_line, expand};

/// Drives one command over a list of tokens.
#[derive(Debug, Clone)]
pub struct Orchestrator<R> {
    runner: R,
    git: PathBuf,
}

impl<R: CommandRunner> Orchestrator<R> {
    /// Creates an orchestrator running `git` from PATH.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            git: PathBuf::from(DEFAULT_GIT),
        }
    }

    /// Uses another git executable (name or path).
    #[must_use]
    pub fn with_git_program(mut self, git: impl Into<PathBuf>) -> Self {
        self.git = git.into();
        self
    }

    /// Returns the command runner.
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Returns the git executable.
    #[must_use]
    pub fn git_program(&self) -> &Path {
        &self.git
    }

    /// Expands every token and either prints or runs the command for it.
    ///
    /// In dry-run mode one advisory line per token is written to `out` and
    /// nothing is executed. Otherwise each token gets exactly one invocation,
    /// in input order, and the first failure ends the run. An empty token list
    /// runs the bare command once; callers reject that for commands that need
    /// patterns.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationError::InvocationFailed`] naming the first token
    /// whose command failed, [`OrchestrationError::StepFailed`] if the bare
    /// command failed, or [`OrchestrationError::Output`] if `out` rejects a
    /// write.
    pub fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
        options: &Options,
        out: &mut impl Write,
    ) -> Result<(), OrchestrationError> {
        let command = options.command();

        if options.dry_run() {
            for token in tokens {
                let globs = expand(token.as_ref(), options);
                writeln!(out, "{}", dry_run_line(command.label(), &globs))?;
            }
            return Ok(());
        }

        if tokens.is_empty() {
            let invocation = command.invocation::<&str>(&self.git, &[]);
            debug!(command = %command, "running without patterns");
            return self
                .runner
                .run(&invocation)
                .map_err(|source| OrchestrationError::StepFailed {
                    step: command.label(),
                    source,
                });
        }

        // Child output goes straight to the terminal; keep ours ahead of it.
        out.flush()?;
        for token in tokens {
            let token = token.as_ref();
            let globs = expand(token, options);
            info!(command = %command, token, patterns = %globs.join(" "), "running");

            let invocation = command.invocation(&self.git, &globs);
            self.runner
                .run(&invocation)
                .map_err(|source| OrchestrationError::InvocationFailed {
                    token: token.to_string(),
                    command: command.label(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
