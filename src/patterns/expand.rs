// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Token to glob expansion.

use super::options::Options;

/// Prefix matching files in the current directory.
pub const LOCAL_PREFIX: &str = "*.";

/// Prefix matching files in every directory of the repository.
pub const RECURSIVE_PREFIX: &str = "**/*.";

/// Expands a bare extension into wildmatch patterns.
///
/// Order is fixed: local lowercase, local uppercase, recursive lowercase,
/// recursive uppercase, keeping only the members `options` selects. Case
/// folding covers the whole token. Identical folds (e.g. `"7z"` has no
/// uppercase form) are both kept.
///
/// ```
/// use git_lfs_patterns::patterns::{expand, CommandKind, Options};
///
/// let options = Options::builder()
///     .both_cases(true)
///     .everywhere(true)
///     .command(CommandKind::LfsTrack)
///     .build();
/// assert_eq!(expand("mp4", &options), ["*.mp4", "*.MP4", "**/*.mp4", "**/*.MP4"]);
/// ```
#[must_use]
pub fn expand(token: &str, options: &Options) -> Vec<String> {
    let lower = token.to_lowercase();
    let upper = options.both_cases().then(|| token.to_uppercase());

    let scopes: &[&str] = if options.everywhere() {
        &[LOCAL_PREFIX, RECURSIVE_PREFIX]
    } else {
        &[LOCAL_PREFIX]
    };

    let mut globs = Vec::with_capacity(options.patterns_per_token());
    for prefix in scopes {
        globs.push(format!("{prefix}{lower}"));
        if let Some(upper) = &upper {
            globs.push(format!("{prefix}{upper}"));
        }
    }
    globs
}
