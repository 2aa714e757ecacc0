// git-lfs-patterns: Git LFS pattern front ends
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. .git-lfs-patterns.toml (cwd, optional)
//! 3. --config FILE (each, required)
//! 4. GIT_LFS_PATTERNS_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIT_LFS_PATTERNS_PATTERNS__BOTH_CASES=true    → patterns.both_cases = true
//! GIT_LFS_PATTERNS_TOOLS__GIT=/usr/bin/git      → tools.git = "/usr/bin/git"
//! GIT_LFS_PATTERNS_GLOBAL__OUTPUT_LOG_LEVEL=4   → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub use loader::ConfigLoader;
pub use types::{GlobalConfig, PatternsConfig, ToolsConfig, UnmigrateConfig};

/// Optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".git-lfs-patterns.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GIT_LFS_PATTERNS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Expansion defaults.
    pub patterns: PatternsConfig,
    /// Unmigrate workflow.
    pub unmigrate: UnmigrateConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_lfs_patterns::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional(".git-lfs-patterns.toml")
    ///     .with_env_prefix("GIT_LFS_PATTERNS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Rejects values that deserialize but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty commit message or an
    /// empty git path.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.unmigrate.commit_message.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "unmigrate".to_string(),
                key: "commit_message".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.tools.git.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "tools".to_string(),
                key: "git".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("patterns.both_cases", self.patterns.both_cases.to_string());
        options.insert("patterns.everywhere", self.patterns.everywhere.to_string());
        options.insert(
            "unmigrate.commit_message",
            self.unmigrate.commit_message.clone(),
        );
        options.insert("tools.git", self.tools.git.display().to_string());

        let max_key_len = options.keys().map(|key| key.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
