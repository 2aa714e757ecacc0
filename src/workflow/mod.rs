// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compound workflows built on the orchestrator.
//!
//! ```text
//! Unmigrate::run(tokens)
//!   1. git lfs untrack <globs>   one per token (orchestrator, stops on failure)
//!   2. git add --renormalize .   fatal
//!   3. git commit -m <message>   failure reported ("No changes to commit")
//!   4. git push                  fatal
//!
//! dry run: untrack lines, then the three follow-up lines, always
//! ```
//!
//! Moving files back from LFS this way does not rewrite history.

use std::io::Write;

use tracing::warn;

use crate::core::process::{CommandRunner, Invocation};
use crate::error::OrchestrationError;
use crate::orchestrator::Orchestrator;
use crate::patterns::command::DEFAULT_GIT;
use crate::patterns::dry_run::DRY_RUN_PREFIX;
use crate::patterns::{CommandKind, Options};

/// Commit message used when none is configured.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Restore patterns to Git from Git LFS";

/// What happens when a follow-up step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Stop the workflow and report the failure.
    Abort,
    /// Print the message and continue with the next step.
    Report(&'static str),
}

/// One fixed git command run after the untrack pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    /// Name used in errors.
    step: &'static str,
    /// Progress line printed before a live run.
    progress: &'static str,
    /// Arguments after `git`.
    args: Vec<String>,
    on_failure: OnFailure,
}

impl FollowUp {
    /// Display name, e.g. `git push`.
    #[must_use]
    pub const fn step(&self) -> &'static str {
        self.step
    }

    /// What a failure of this step does to the run.
    #[must_use]
    pub const fn on_failure(&self) -> OnFailure {
        self.on_failure
    }

    /// Arguments passed to the git program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Dry-run line, quoting arguments that contain spaces.
    #[must_use]
    pub fn advisory(&self) -> String {
        let shown: Vec<String> = self
            .args
            .iter()
            .map(|arg| {
                if arg.contains(' ') {
                    format!("\"{arg}\"")
                } else {
                    arg.clone()
                }
            })
            .collect();
        format!("{DRY_RUN_PREFIX}{DEFAULT_GIT} {}", shown.join(" "))
    }
}

/// Stage, commit and push steps committing with `commit_message`.
#[must_use]
pub fn follow_up_steps(commit_message: &str) -> [FollowUp; 3] {
    [
        FollowUp {
            step: "git add --renormalize",
            progress: "Renormalizing files...",
            args: vec!["add".into(), "--renormalize".into(), ".".into()],
            on_failure: OnFailure::Abort,
        },
        FollowUp {
            step: "git commit",
            progress: "Committing changes...",
            args: vec!["commit".into(), "-m".into(), commit_message.to_string()],
            on_failure: OnFailure::Report("No changes to commit"),
        },
        FollowUp {
            step: "git push",
            progress: "Pushing changes...",
            args: vec!["push".into()],
            on_failure: OnFailure::Abort,
        },
    ]
}

/// Moves files matching the given extensions from Git LFS back to Git.
#[derive(Debug, Clone)]
pub struct Unmigrate<R> {
    orchestrator: Orchestrator<R>,
    commit_message: String,
}

impl<R: CommandRunner> Unmigrate<R> {
    /// Workflow committing with [`DEFAULT_COMMIT_MESSAGE`].
    pub fn new(orchestrator: Orchestrator<R>) -> Self {
        Self {
            orchestrator,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }

    /// Replaces the commit message.
    #[must_use]
    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Message used by the commit step.
    #[must_use]
    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }

    /// The three steps that follow the untrack pass, in execution order.
    #[must_use]
    pub fn follow_ups(&self) -> [FollowUp; 3] {
        follow_up_steps(&self.commit_message)
    }

    /// Untracks every token, then renormalizes, commits and pushes.
    ///
    /// `options.command()` is ignored: the pass always targets
    /// `git lfs untrack`. In dry-run mode the follow-up lines are printed even
    /// when no token was given.
    ///
    /// # Errors
    ///
    /// Returns the untrack failure if any token fails (follow-ups are skipped),
    /// [`OrchestrationError::StepFailed`] if staging or pushing fails, or
    /// [`OrchestrationError::Output`] if `out` rejects a write.
    pub fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
        options: &Options,
        out: &mut impl Write,
    ) -> Result<(), OrchestrationError> {
        let options = options.for_command(CommandKind::LfsUntrack);
        self.orchestrator.run(tokens, &options, out)?;

        let follow_ups = self.follow_ups();
        if options.dry_run() {
            for follow_up in &follow_ups {
                writeln!(out, "{}", follow_up.advisory())?;
            }
            return Ok(());
        }

        for follow_up in &follow_ups {
            writeln!(out, "{}", follow_up.progress)?;
            out.flush()?;

            let invocation =
                Invocation::new(self.orchestrator.git_program()).args(&follow_up.args);
            if let Err(source) = self.orchestrator.runner().run(&invocation) {
                match follow_up.on_failure {
                    OnFailure::Abort => {
                        return Err(OrchestrationError::StepFailed {
                            step: follow_up.step,
                            source,
                        });
                    }
                    OnFailure::Report(message) => {
                        warn!(step = follow_up.step, error = %source, "continuing after failed step");
                        writeln!(out, "{message}")?;
                    }
                }
            }
        }

        writeln!(out, "Unmigration complete!")?;
        Ok(())
    }
}
