// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dry-run advisory lines.
//!
//! Scripts parse these lines; prefix, spacing and order are fixed.

/// Prefix of every advisory line.
pub const DRY_RUN_PREFIX: &str = "DRY RUN: ";

/// Formats `DRY RUN: <label> <glob> <glob> ...`.
#[must_use]
pub fn dry_run_line<S: AsRef<str>>(label: &str, globs: &[S]) -> String {
    let joined = globs
        .iter()
        .map(|glob| glob.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    format!("{DRY_RUN_PREFIX}{label} {joined}")
}
