// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The five front ends and their help text.

use std::fmt::Write as _;

use crate::patterns::{CommandKind, Options, dry_run_line, expand};
use crate::workflow::{DEFAULT_COMMIT_MESSAGE, follow_up_steps};

/// One installed executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// `git-ls-files`
    LsFiles,
    /// `git-lfs-files`
    LfsFiles,
    /// `git-lfs-track`
    LfsTrack,
    /// `git-lfs-untrack`
    LfsUntrack,
    /// `git-unmigrate`
    Unmigrate,
}

/// A worked example shown in `--help`.
struct Example {
    title: &'static str,
    both_cases: bool,
    everywhere: bool,
    tokens: &'static [&'static str],
}

const EXAMPLES: &[Example] = &[
    Example {
        title: "Single pattern dry run",
        both_cases: false,
        everywhere: false,
        tokens: &["zip"],
    },
    Example {
        title: "Multiple patterns",
        both_cases: false,
        everywhere: false,
        tokens: &["pdf", "zip"],
    },
    Example {
        title: "Case variations",
        both_cases: true,
        everywhere: false,
        tokens: &["mp3"],
    },
    Example {
        title: "Multiple patterns with case variations",
        both_cases: true,
        everywhere: false,
        tokens: &["mp3", "mp4"],
    },
    Example {
        title: "Apply everywhere in repository",
        both_cases: false,
        everywhere: true,
        tokens: &["zip"],
    },
    Example {
        title: "Combined: everywhere + case variations",
        both_cases: true,
        everywhere: true,
        tokens: &["mp3"],
    },
    Example {
        title: "Multiple patterns with all options",
        both_cases: true,
        everywhere: true,
        tokens: &["mp3", "mp4"],
    },
];

impl Tool {
    /// Every front end, in installation order.
    pub const ALL: [Self; 5] = [
        Self::LsFiles,
        Self::LfsFiles,
        Self::LfsTrack,
        Self::LfsUntrack,
        Self::Unmigrate,
    ];

    /// Executable name.
    #[must_use]
    pub const fn bin_name(self) -> &'static str {
        match self {
            Self::LsFiles => "git-ls-files",
            Self::LfsFiles => "git-lfs-files",
            Self::LfsTrack => "git-lfs-track",
            Self::LfsUntrack => "git-lfs-untrack",
            Self::Unmigrate => "git-unmigrate",
        }
    }

    /// Underlying command run once per pattern.
    #[must_use]
    pub const fn command(self) -> CommandKind {
        match self {
            Self::LsFiles => CommandKind::LsFiles,
            Self::LfsFiles => CommandKind::LfsLsFiles,
            Self::LfsTrack => CommandKind::LfsTrack,
            Self::LfsUntrack | Self::Unmigrate => CommandKind::LfsUntrack,
        }
    }

    /// Whether running without a pattern is a usage error.
    #[must_use]
    pub const fn requires_patterns(self) -> bool {
        !self.command().allows_no_patterns()
    }

    /// Whether repository checks run before anything else.
    #[must_use]
    pub const fn runs_preflight(self) -> bool {
        matches!(self, Self::Unmigrate)
    }

    /// One-line summary shown by `-h`.
    #[must_use]
    pub const fn about(self) -> &'static str {
        match self {
            Self::LsFiles => "List files in the index matching extension patterns",
            Self::LfsFiles => "List Git LFS files matching extension patterns",
            Self::LfsTrack => "Track extension patterns with Git LFS",
            Self::LfsUntrack => "Stop tracking extension patterns with Git LFS",
            Self::Unmigrate => "Move matching files from Git LFS back to Git",
        }
    }

    /// Description shown by `--help`.
    #[must_use]
    pub fn long_about(self) -> String {
        let mut text = format!("{}\n\n", self.about());
        match self {
            Self::Unmigrate => text.push_str(
                "Untracks the patterns, renormalizes the work tree, commits and pushes. \
                 Only files matching the patterns in the current directory are processed \
                 unless --everywhere is given.\n\n\
                 History is not rewritten, so other users do not need to re-clone. \
                 Large repositories can take a long time.\n\n\
                 Requires a Git work tree, Git LFS, and a .gitattributes file with LFS patterns.",
            ),
            _ => {
                let _ = write!(
                    text,
                    "Permutes each extension into wildmatch patterns and runs '{}' once per \
                     extension. Not every option of the underlying command is supported; run \
                     it directly when needed.",
                    self.command().label()
                );
            }
        }
        text
    }

    /// Worked examples with the exact dry-run output they produce.
    #[must_use]
    pub fn help_examples(self) -> String {
        let mut text = String::from("Examples:\n");
        for example in EXAMPLES {
            let options = Options::builder()
                .both_cases(example.both_cases)
                .everywhere(example.everywhere)
                .dry_run(true)
                .command(self.command())
                .build();

            let mut flags = String::from("-d");
            if example.both_cases {
                flags.push('c');
            }
            if example.everywhere {
                flags.push('e');
            }

            let mut output: Vec<String> = example
                .tokens
                .iter()
                .map(|token| dry_run_line(self.command().label(), &expand(token, &options)))
                .collect();
            if self == Self::Unmigrate {
                output.extend(
                    follow_up_steps(DEFAULT_COMMIT_MESSAGE)
                        .iter()
                        .map(|step| step.advisory()),
                );
            }

            let _ = writeln!(text, "  # {}", example.title);
            let _ = writeln!(
                text,
                "  {} {flags} {}",
                self.bin_name(),
                example.tokens.join(" ")
            );
            for (i, line) in output.iter().enumerate() {
                let lead = if i == 0 { "# Output:" } else { "#        " };
                let _ = writeln!(text, "  {lead} {line}");
            }
            text.push('\n');
        }
        let _ = write!(
            text,
            "See also: {}",
            Self::ALL
                .iter()
                .filter(|tool| **tool != self)
                .map(|tool| tool.bin_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        text
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.bin_name())
    }
}
