// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Individual preflight checks.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::attributes::{GITATTRIBUTES, lfs_patterns};
use crate::core::process::{CommandRunner, Invocation, ShellRunner};
use crate::error::{PreflightError, ProcessError};

/// Work tree that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsRepository {
    /// Root of the work tree.
    pub root: PathBuf,
    /// Patterns currently routed through LFS, in `.gitattributes` order.
    pub patterns: Vec<String>,
}

/// Finds the repository containing `dir` and returns its work-tree root.
///
/// # Errors
///
/// Returns [`PreflightError::NotARepository`] if no repository encloses `dir`,
/// or [`PreflightError::BareRepository`] if it has no work tree.
pub fn ensure_git_repository(dir: &Path) -> Result<PathBuf, PreflightError> {
    let repo = gix::discover(dir).map_err(|e| {
        debug!(dir = %dir.display(), error = %e, "repository discovery failed");
        PreflightError::NotARepository {
            path: dir.display().to_string(),
        }
    })?;

    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| PreflightError::BareRepository {
            path: repo.git_dir().display().to_string(),
        })
}

/// Checks that `program` resolves to an executable.
///
/// # Errors
///
/// Returns [`PreflightError::ToolNotFound`] if the lookup fails.
pub fn ensure_tool(program: &Path) -> Result<PathBuf, PreflightError> {
    ShellRunner::which(program).map_err(|_| PreflightError::ToolNotFound {
        name: program.display().to_string(),
    })
}

/// Runs `git lfs version` with its output discarded.
///
/// # Errors
///
/// Returns [`PreflightError::ToolNotFound`] if git itself is missing, or
/// [`PreflightError::LfsNotInstalled`] for any other failure.
pub fn ensure_lfs_installed<R: CommandRunner>(
    runner: &R,
    git: &Path,
) -> Result<(), PreflightError> {
    let probe = Invocation::new(git).args(["lfs", "version"]).quiet();
    runner.run(&probe).map_err(|err| match err {
        ProcessError::ExecutableNotFound { name } => PreflightError::ToolNotFound { name },
        other => PreflightError::LfsNotInstalled(other),
    })
}

/// Reads `<root>/.gitattributes` and returns its LFS patterns.
///
/// # Errors
///
/// Returns [`PreflightError::MissingGitattributes`] if the file does not
/// exist, [`PreflightError::ReadGitattributes`] if it cannot be read, or
/// [`PreflightError::NoLfsPatterns`] if no line uses the LFS filter.
pub fn ensure_lfs_configured(root: &Path) -> Result<Vec<String>, PreflightError> {
    let path = root.join(GITATTRIBUTES);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PreflightError::MissingGitattributes);
        }
        Err(source) => {
            return Err(PreflightError::ReadGitattributes {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let patterns: Vec<String> = lfs_patterns(&contents)
        .into_iter()
        .map(str::to_string)
        .collect();
    if patterns.is_empty() {
        return Err(PreflightError::NoLfsPatterns);
    }
    debug!(count = patterns.len(), "found LFS patterns");
    Ok(patterns)
}

/// Runs every check in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the [`PreflightError`] of the first failing check.
pub fn run_preflight<R: CommandRunner>(
    runner: &R,
    git: &Path,
    dir: &Path,
) -> Result<LfsRepository, PreflightError> {
    let root = ensure_git_repository(dir)?;
    ensure_tool(git)?;
    ensure_lfs_installed(runner, git)?;
    let patterns = ensure_lfs_configured(&root)?;
    Ok(LfsRepository { root, patterns })
}
