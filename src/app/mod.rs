// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared `main` of the five executables.
//!
//! ```text
//! main_for(tool)
//!   try_parse_for(tool) --> help/version: exit 0, usage error: exit 1
//!        |
//!   config_loader (.git-lfs-patterns.toml, --config, env, CLI) --> build
//!        |
//!   init_logging
//!        |
//!   run(tool, cli, config, ShellRunner, cwd, stdout)
//!     patterns required but none --> MissingPatterns (help + error, exit 1)
//!     unmigrate                  --> run_preflight
//!     ls-files / lfs-files / track / untrack --> Orchestrator::run
//!     unmigrate                            --> Unmigrate::run
//! ```

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, trace};

use crate::cli::global::GlobalOptions;
use crate::cli::{self, Cli, Tool};
use crate::config::{Config, ConfigLoader, ENV_PREFIX, LOCAL_CONFIG_FILE};
use crate::core::process::{CommandRunner, ShellRunner};
use crate::error::{AppResult, OrchestrationError, Result};
use crate::git::run_preflight;
use crate::logging::{LogConfig, init_logging};
use crate::orchestrator::Orchestrator;
use crate::workflow::Unmigrate;

/// Runs one front end against the real process environment.
#[must_use]
pub fn main_for(tool: Tool) -> ExitCode {
    let cli = match cli::try_parse_for(tool, std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let loader = match config_loader(&cli.global, &cwd) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    for source in &sources {
        debug!(source = %source, "loaded config");
    }
    for line in config.format_options() {
        trace!("{line}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(tool, &cli, &config, &ShellRunner, &cwd, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            drop(out);
            if e.is_usage() {
                eprintln!("{}", cli::command_for(tool).render_help());
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Executes `tool` with already parsed arguments and loaded configuration.
///
/// # Errors
///
/// Returns a usage error when a pattern is required and none was given, a
/// preflight error for unmigrate outside a usable LFS repository, or the
/// first failure of the underlying commands.
pub fn run<R: CommandRunner>(
    tool: Tool,
    cli: &Cli,
    config: &Config,
    runner: &R,
    cwd: &Path,
    out: &mut impl Write,
) -> AppResult<()> {
    if tool.requires_patterns() && cli.patterns.is_empty() {
        return Err(OrchestrationError::MissingPatterns {
            command: tool.bin_name(),
        }
        .into());
    }

    let options = cli.options(tool, config.patterns);
    let git = config.tools.git.as_path();
    debug!(
        tool = %tool,
        patterns = cli.patterns.len(),
        both_cases = options.both_cases(),
        everywhere = options.everywhere(),
        dry_run = options.dry_run(),
        "starting"
    );

    if tool.runs_preflight() {
        let repo = run_preflight(runner, git, cwd)?;
        debug!(root = %repo.root.display(), lfs_patterns = ?repo.patterns, "preflight passed");
    }

    let orchestrator = Orchestrator::new(runner).with_git_program(git);
    if tool == Tool::Unmigrate {
        Unmigrate::new(orchestrator)
            .with_commit_message(config.unmigrate.commit_message.as_str())
            .run(&cli.patterns, &options, out)?;
    } else {
        orchestrator.run(&cli.patterns, &options, out)?;
    }
    Ok(())
}

/// Collects every configuration source for a run started in `cwd`.
///
/// # Errors
///
/// Returns an error if a command-line override cannot be applied.
pub fn config_loader(global: &GlobalOptions, cwd: &Path) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(cwd.join(LOCAL_CONFIG_FILE));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    global.apply_overrides(loader.with_env_prefix(ENV_PREFIX))
}

/// Logging setup from the resolved `[global]` section.
#[must_use]
pub fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}
