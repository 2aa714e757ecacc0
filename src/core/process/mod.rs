// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking process execution behind a replaceable runner.
//!
//! ```text
//! Invocation::new("git")
//!   .args(["lfs", "track"]) .args(globs) .quiet()
//!       |
//!       v
//! CommandRunner::run(&Invocation)
//!   ShellRunner   --> which() --> std::process::Command
//!                     stdin/stdout/stderr inherited (or null when quiet)
//!                     wait for exit
//!   (tests)       --> recording fake, nothing spawned
//!       |
//!       v
//! Ok(()) | ProcessError { NotFound, SpawnFailed, NonZeroExit, Terminated }
//! ```

pub mod invocation;
pub mod runner;


pub use invocation::Invocation;
pub use runner::{CommandRunner, ShellRunner};
