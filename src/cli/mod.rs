// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line parsing shared by all front ends.
//!
//! # Command Structure
//!
//! ```text
//! git-ls-files    [OPTIONS] [PATTERN]...
//! git-lfs-files   [OPTIONS] [PATTERN]...
//! git-lfs-track   [OPTIONS] PATTERN...
//! git-lfs-untrack [OPTIONS] PATTERN...
//! git-unmigrate   [OPTIONS] PATTERN...
//!
//! OPTIONS: -c/--both-cases  -d/--dry-run  -e/--everywhere
//!          -l/--log-level  --file-log-level  --log-file  --config
//! ```
//!
//! One argument struct serves every executable; [`Tool`] supplies the name,
//! description and worked examples.

pub mod global;
pub mod tool;


use clap::{CommandFactory, FromArgMatches, Parser};

use crate::cli::global::GlobalOptions;
use crate::patterns::Options;

pub use tool::Tool;

/// Arguments accepted by every front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(author, version)]
pub struct Cli {
    /// Expand each pattern to lower and upper case, helpful for media files
    #[arg(short = 'c', long = "both-cases", visible_alias = "case", alias = "bothcases")]
    pub both_cases: bool,

    /// Dry run: print the commands that would run instead of running them
    #[arg(short = 'd', long = "dry-run", alias = "dryrun")]
    pub dry_run: bool,

    /// Apply the pattern everywhere (all directories in the repository)
    #[arg(short = 'e', long = "everywhere")]
    pub everywhere: bool,

    /// Logging and configuration options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// File extensions to permute, such as `mp3` or `zip`
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

impl Cli {
    /// Builds expansion options for `tool`, OR-ing in configured defaults.
    #[must_use]
    pub fn options(&self, tool: Tool, defaults: crate::config::PatternsConfig) -> Options {
        Options::builder()
            .both_cases(self.both_cases || defaults.both_cases)
            .everywhere(self.everywhere || defaults.everywhere)
            .dry_run(self.dry_run)
            .command(tool.command())
            .build()
    }
}

/// Returns the clap command for one front end.
#[must_use]
pub fn command_for(tool: Tool) -> clap::Command {
    Cli::command()
        .name(tool.bin_name())
        .bin_name(tool.bin_name())
        .about(tool.about())
        .long_about(tool.long_about())
        .after_help(tool.help_examples())
}

/// Parses the arguments of one front end.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse_for<I, T>(tool: Tool, iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut matches = command_for(tool).try_get_matches_from(iter)?;
    Cli::from_arg_matches_mut(&mut matches)
}
