// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Underlying git commands the front ends wrap.

use std::fmt;
use std::path::Path;

use crate::core::process::Invocation;

/// Default program used to run git.
pub const DEFAULT_GIT: &str = "git";

/// The git operation a front end targets.
///
/// The label is what dry-run lines print; the git arguments are what a live
/// run passes before the expanded patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `git ls-files`
    LsFiles,
    /// `git lfs ls-files`
    LfsLsFiles,
    /// `git lfs track`
    LfsTrack,
    /// `git lfs untrack`
    LfsUntrack,
}

impl CommandKind {
    /// Every command, in a stable order.
    pub const ALL: [Self; 4] = [Self::LsFiles, Self::LfsLsFiles, Self::LfsTrack, Self::LfsUntrack];

    /// Command label used in dry-run output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LsFiles => "git ls-files",
            Self::LfsLsFiles => "git lfs ls-files",
            Self::LfsTrack => "git lfs track",
            Self::LfsUntrack => "git lfs untrack",
        }
    }

    /// Arguments passed to git ahead of the patterns.
    #[must_use]
    pub const fn git_args(self) -> &'static [&'static str] {
        match self {
            Self::LsFiles => &["ls-files"],
            Self::LfsLsFiles => &["lfs", "ls-files"],
            Self::LfsTrack => &["lfs", "track"],
            Self::LfsUntrack => &["lfs", "untrack"],
        }
    }

    /// Whether running without any pattern is meaningful (list everything).
    #[must_use]
    pub const fn allows_no_patterns(self) -> bool {
        matches!(self, Self::LsFiles | Self::LfsLsFiles)
    }

    /// Builds the invocation for one token's expanded patterns.
    #[must_use]
    pub fn invocation<S: AsRef<str>>(self, git: &Path, globs: &[S]) -> Invocation {
        Invocation::new(git)
            .args(self.git_args())
            .args(globs.iter().map(|glob| glob.as_ref()))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
