// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Expansion and execution options.

use bon::Builder;

use super::command::CommandKind;

/// Options shared by expansion, formatting and execution.
///
/// Built once from the parsed flags and never changed afterwards; deriving a
/// variant for another command produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct Options {
    /// Emit both the lowercase and the uppercase form of the token.
    #[builder(default)]
    both_cases: bool,
    /// Also emit recursive `**/` patterns.
    #[builder(default)]
    everywhere: bool,
    /// Print what would run instead of running it.
    #[builder(default)]
    dry_run: bool,
    /// Underlying command.
    command: CommandKind,
}

impl Options {
    /// Whether an uppercase variant follows each lowercase one.
    #[must_use]
    pub const fn both_cases(&self) -> bool {
        self.both_cases
    }

    /// Whether recursive `**/` variants are emitted.
    #[must_use]
    pub const fn everywhere(&self) -> bool {
        self.everywhere
    }

    /// Whether commands are printed instead of run.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Command each expanded token is passed to.
    #[must_use]
    pub const fn command(&self) -> CommandKind {
        self.command
    }

    /// Same options targeting a different command.
    #[must_use]
    pub const fn for_command(self, command: CommandKind) -> Self {
        Self { command, ..self }
    }

    /// Number of patterns every token expands to: 1, 2 or 4.
    #[must_use]
    pub const fn patterns_per_token(&self) -> usize {
        let cases = if self.both_cases { 2 } else { 1 };
        let scopes = if self.everywhere { 2 } else { 1 };
        cases * scopes
    }
}
