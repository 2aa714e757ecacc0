// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git-ls-files`: Lists files in the index matching extension patterns.

use std::process::ExitCode;

use git_lfs_patterns::app;
use git_lfs_patterns::cli::Tool;

fn main() -> ExitCode {
    app::main_for(Tool::LsFiles)
}
