// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.gitattributes` scanning.

/// Attributes file at the root of the work tree.
pub const GITATTRIBUTES: &str = ".gitattributes";

/// Attribute marking a pattern as stored in Git LFS.
const LFS_FILTER: &str = "filter=lfs";

/// Returns the pattern of every line routed through the LFS filter.
///
/// Blank lines and `#` comments are skipped. The pattern is the first
/// whitespace-separated field; lines are returned in file order.
///
/// ```
/// use git_lfs_patterns::git::lfs_patterns;
///
/// let contents = "# media\n*.mp3 filter=lfs diff=lfs merge=lfs -text\n*.txt text\n";
/// assert_eq!(lfs_patterns(contents), ["*.mp3"]);
/// ```
#[must_use]
pub fn lfs_patterns(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.contains(LFS_FILTER))
        .filter_map(|line| line.split_whitespace().next())
        .collect()
}
