// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pattern permutation.
//!
//! ```text
//! token "MoV" + Options { both_cases, everywhere }
//!        |
//!        v
//!     expand()
//!        |
//!        v
//!   *.mov  *.MOV  **/*.mov  **/*.MOV
//!   local          recursive
//!   (always)       (everywhere only)
//!        |
//!        v
//!   dry_run_line("git lfs track", globs)
//!   "DRY RUN: git lfs track *.mov *.MOV **/*.mov **/*.MOV"
//! ```
//!
//! Expansion produces pattern strings for git's wildmatch; nothing here
//! matches files.

pub mod command;
pub mod dry_run;
pub mod expand;
pub mod options;


pub use command::CommandKind;
pub use dry_run::dry_run_line;
pub use expand::expand;
pub use options::Options;
