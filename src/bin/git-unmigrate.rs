// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git-unmigrate`: Moves matching files from Git LFS back to Git.

use std::process::ExitCode;

use git_lfs_patterns::app;
use git_lfs_patterns::cli::Tool;

fn main() -> ExitCode {
    app::main_for(Tool::Unmigrate)
}
