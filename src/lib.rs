// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!   src/bin/git-ls-files  git-lfs-files  git-lfs-track  git-lfs-untrack  git-unmigrate
//!                                      |
//!                                      v
//!                          app::main_for(Tool)
//!                                      |
//!                +---------------------+---------------------+
//!                v                     v                     v
//!            cli (clap)         config (TOML, env)     git (preflight)
//!                |                                           |
//!                +---------------------+---------------------+
//!                                      v
//!                      workflow::Unmigrate (untrack, add, commit, push)
//!                                      |
//!                                      v
//!                      orchestrator (one invocation per token)
//!                                      |
//!                      +---------------+---------------+
//!                      v                               v
//!            patterns (expand, dry run)      core::process (CommandRunner)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod orchestrator;
pub mod patterns;
pub mod workflow;

#[cfg(test)]
mod test_utils;
