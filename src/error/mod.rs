// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          AppError (16 bytes)
//!                 |
//!        +--------+--------+
//!        |                 |
//!        v                 v
//!  Orchestration       Preflight
//!       Box               Box
//!
//! Sub-errors (unboxed internally):
//!   Orchestration  MissingPatterns, InvocationFailed, StepFailed, Output
//!   Preflight      NotARepository, ToolNotFound, LfsNotInstalled, ...
//!   Process        ExecutableNotFound, SpawnFailed, NonZeroExit, Terminated
//!
//! ConfigError travels inside `anyhow::Error` from the loader and is
//! reported before any command runs.
//! ```
//!
//! Only two failure classes reach the user from the engine: a precondition
//! violation (nothing ran yet) and an invocation failure (names the token).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AppError`].
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Top-level application error type.
///
/// Both sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum AppError {
    /// Pattern expansion or command orchestration failed.
    #[error(transparent)]
    Orchestration(#[from] Box<OrchestrationError>),

    /// The repository or toolchain is not in a usable state.
    #[error(transparent)]
    Preflight(#[from] Box<PreflightError>),
}

impl AppError {
    /// True when the command line lacked a required pattern.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Orchestration(err) if matches!(**err, OrchestrationError::MissingPatterns { .. }))
    }

    /// True when the failure happened before any command was started.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        match self {
            Self::Orchestration(err) => matches!(**err, OrchestrationError::MissingPatterns { .. }),
            Self::Preflight(_) => true,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    OrchestrationError => Orchestration,
    PreflightError => Preflight,
}

// --- Orchestration Errors ---

/// Errors raised while expanding patterns and running the underlying command.
#[derive(Debug, Error)]
pub enum OrchestrationError {
    /// A command that needs at least one pattern was given none.
    #[error("{command} requires at least one pattern")]
    MissingPatterns { command: &'static str },

    /// The underlying command failed for one token; remaining tokens were skipped.
    #[error("failed to run {command} for pattern '{token}': {source}")]
    InvocationFailed {
        token: String,
        command: &'static str,
        #[source]
        source: ProcessError,
    },

    /// A command run without a token (bare listing, workflow step) failed.
    #[error("{step} failed: {source}")]
    StepFailed {
        step: &'static str,
        #[source]
        source: ProcessError,
    },

    /// Writing advisory or progress output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl OrchestrationError {
    /// Token whose invocation failed, if this is an invocation failure.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::InvocationFailed { token, .. } => Some(token),
            _ => None,
        }
    }
}

// --- Preflight Errors ---

/// Repository and toolchain checks performed before running a workflow.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Not inside a git work tree.
    #[error("not a git repository (or any of the parent directories): {path}")]
    NotARepository { path: String },

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository): {path}")]
    BareRepository { path: String },

    /// Required executable could not be found.
    #[error("{name} is not installed or not in PATH")]
    ToolNotFound { name: String },

    /// `git lfs version` did not succeed.
    #[error("Git LFS is not installed or not available; install from https://git-lfs.com/")]
    LfsNotInstalled(#[source] ProcessError),

    /// No `.gitattributes` at the repository root.
    #[error("Git LFS is not configured for this repository: no .gitattributes file found")]
    MissingGitattributes,

    /// `.gitattributes` exists but declares no `filter=lfs` pattern.
    #[error(
        "Git LFS is not configured for this repository: no LFS tracked patterns found in .gitattributes"
    )]
    NoLfsPatterns,

    /// `.gitattributes` could not be read.
    #[error("error reading {path}: {source}")]
    ReadGitattributes {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Log level outside 0-6, whichever key it was given for.
    #[error("log level must be 0-6, got {0}")]
    LogLevelOutOfRange(u8),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was killed by a signal before reporting an exit code.
    #[error("process '{command}' was terminated by a signal")]
    Terminated { command: String },
}
