// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for running external commands.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!     /       \
//! Invocation  CommandRunner
//!             ShellRunner (inherit stdio)
//! ```

pub mod process;
