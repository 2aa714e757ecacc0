// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository checks run before the unmigrate workflow.
//!
//! ```text
//!   cwd
//!    |
//!    v
//! ensure_git_repository   gix::discover, needs a work tree --> root
//!    |
//!    v
//! ensure_tool             which(git)
//!    |
//!    v
//! ensure_lfs_installed    `git lfs version` (quiet, via CommandRunner)
//!    |
//!    v
//! ensure_lfs_configured   <root>/.gitattributes has a `filter=lfs` line
//!    |
//!    v
//! LfsRepository { root, patterns }
//! ```
//!
//! Repository discovery is read-only and done in-process with `gix`; only the
//! LFS probe spawns a child.

pub mod attributes;
pub mod preflight;


pub use attributes::{GITATTRIBUTES, lfs_patterns};
pub use preflight::{
    LfsRepository, ensure_git_repository, ensure_lfs_configured, ensure_lfs_installed,
    ensure_tool, run_preflight,
};
