// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Path configuration.
//!
//! ```text
//! home/
//!   .MacOSX/
//!     environment.plist      (legacy dictionary)
//!   Library/LaunchAgents/
//!     environment.plist      (launch agent)
//! ```
//!
//! All paths are optional and resolved from `home` if not set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Target file locations for both plist variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// User home directory (default: discovered from the environment).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
    /// Legacy preferences directory (default: home/.MacOSX).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_dir: Option<PathBuf>,
    /// Launch agent directory (default: home/Library/LaunchAgents).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents_dir: Option<PathBuf>,
    /// Plist file name, identical for both variants.
    pub file_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            home: None,
            legacy_dir: None,
            agents_dir: None,
            file_name: "environment.plist".to_string(),
        }
    }
}

impl PathsConfig {
    /// Resolve all relative paths against the home directory and fill in
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if no home directory is configured
    /// and none can be discovered from the environment.
    pub fn resolve(&mut self) -> Result<()> {
        if self.home.is_none() {
            self.home = dirs::home_dir().or_else(|| std::env::var_os("HOME").map(PathBuf::from));
        }

        let home = self.home.clone().ok_or_else(|| ConfigError::MissingKey {
            section: "paths".to_string(),
            key: "home".to_string(),
        })?;

        let resolve = |path: &mut Option<PathBuf>, parent: &Path, default: &str| match path {
            Some(p) if p.is_relative() => {
                *path = Some(parent.join(p.clone()));
            }
            None => {
                *path = Some(parent.join(default));
            }
            _ => {}
        };

        resolve(&mut self.legacy_dir, &home, ".MacOSX");
        resolve(&mut self.agents_dir, &home, "Library/LaunchAgents");

        Ok(())
    }

    /// Get the home directory, returning an error if not resolved.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the `home` path is not set.
    pub fn home(&self) -> Result<&Path> {
        self.home.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "home".to_string(),
            }
            .into()
        })
    }

    /// Target directory and file for the legacy dictionary variant.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths have not been resolved.
    pub fn legacy_plist(&self) -> Result<(PathBuf, PathBuf)> {
        let dir = self.legacy_dir.clone().ok_or_else(|| missing("legacy_dir"))?;
        let file = dir.join(&self.file_name);
        Ok((dir, file))
    }

    /// Target directory and file for the launch agent variant.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if paths have not been resolved.
    pub fn agent_plist(&self) -> Result<(PathBuf, PathBuf)> {
        let dir = self.agents_dir.clone().ok_or_else(|| missing("agents_dir"))?;
        let file = dir.join(&self.file_name);
        Ok((dir, file))
    }
}

fn missing(key: &str) -> anyhow::Error {
    ConfigError::MissingKey {
        section: "paths".to_string(),
        key: key.to_string(),
    }
    .into()
}
