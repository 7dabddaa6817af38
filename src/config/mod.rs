// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Configuration management for macgoenv-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local macgoenv.toml (cwd)
//! 3. --config
//! 4. MACGOENV_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MACGOENV_ENV_VARIABLE=GOBIN      → env.variable = "GOBIN"
//! MACGOENV_AGENT_LABEL=org.go.env  → agent.label = "org.go.env"
//! MACGOENV_PATHS_HOME=/Users/x     → paths.home = "/Users/x"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{AgentConfig, EnvConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Persisted environment variable.
    pub env: EnvConfig,
    /// Launch agent record settings.
    pub agent: AgentConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use macgoenv_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("macgoenv.toml")
    ///     .with_env_prefix("MACGOENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
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

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if path resolution fails (no usable home directory).
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_env_options(&mut options);
        self.format_agent_options(&mut options);
        self.format_paths_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_env_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("env.variable".into(), self.env.variable.clone());
        options.insert("env.prompt".into(), self.env.prompt.clone());
    }

    fn format_agent_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("agent.label".into(), self.agent.label.clone());
        options.insert("agent.shell".into(), self.agent.shell.clone());
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("paths.home".into(), fmt(&self.paths.home));
        options.insert("paths.legacy_dir".into(), fmt(&self.paths.legacy_dir));
        options.insert("paths.agents_dir".into(), fmt(&self.paths.agents_dir));
        options.insert("paths.file_name".into(), self.paths.file_name.clone());
    }
}
