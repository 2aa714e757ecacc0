// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command runners.
//!
//! ```text
//! run(&Invocation)
//!        |
//!        v
//!   resolve program (which, cached)
//!        |
//!        v
//!   spawn, stdio inherited / null
//!        |
//!        v
//!   wait() --> exit code 0  --> Ok
//!          --> exit code N  --> NonZeroExit
//!          --> no code      --> Terminated (signal)
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::{OnceLock, RwLock};

use tracing::{debug, trace};

use super::invocation::Invocation;
use crate::error::ProcessError;

/// Runs an [`Invocation`] to completion.
///
/// Implementations block until the child has exited. The engine never runs
/// two invocations at once, so implementations need no internal locking.
pub trait CommandRunner {
    /// Executes `invocation` and waits for it.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] if the program cannot be found or started,
    /// exits with a non-zero code, or is killed by a signal.
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        (**self).run(invocation)
    }
}

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<PathBuf, PathBuf>>> = OnceLock::new();

/// Get the executable cache, initializing if needed.
fn exe_cache() -> &'static RwLock<BTreeMap<PathBuf, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// Production runner: spawns real processes sharing the parent's terminal.
///
/// Interactive prompts from git (credentials, editors) keep working because
/// the child inherits stdin, stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Resolves a program through PATH.
    ///
    /// Results are cached for subsequent lookups of the same program.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the executable is not found.
    pub fn which(program: &std::path::Path) -> Result<PathBuf, ProcessError> {
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Ok(path.clone());
            }
        }

        let path = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.display().to_string(),
        })?;
        exe_cache()
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(program.to_path_buf(), path.clone());
        Ok(path)
    }

    fn build_command(program: PathBuf, invocation: &Invocation) -> Command {
        let mut command = Command::new(program);
        command.args(invocation.args_slice());
        if invocation.is_quiet() {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        } else {
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
        command
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        let cmd_line = invocation.command_line();
        let program = Self::which(invocation.program())?;
        debug!(cmd = %cmd_line, "exec");

        let status = Self::build_command(program, invocation)
            .status()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        match status.code() {
            Some(0) => {
                trace!(cmd = %cmd_line, exit_code = 0, "completed");
                Ok(())
            }
            Some(code) => {
                debug!(cmd = %cmd_line, exit_code = code, "command failed");
                Err(ProcessError::NonZeroExit {
                    command: cmd_line,
                    code,
                })
            }
            None => {
                debug!(cmd = %cmd_line, "command terminated by signal");
                Err(ProcessError::Terminated { command: cmd_line })
            }
        }
    }
}
