// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Configuration types for macgoenv-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvConfig, AgentConfig, PathsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. Unset disables file logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// The environment variable being persisted.
///
/// Only one variable is handled per run. The defaults reproduce the original
/// tool: seed from `GOPATH`, ask for a Go path when the seed is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Name of the variable to persist.
    pub variable: String,
    /// Prompt text printed when the seed value is empty.
    pub prompt: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            variable: "GOPATH".to_string(),
            prompt: "Enter desired Go path (GOPATH): ".to_string(),
        }
    }
}

/// Launch agent record settings (Variant B).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// `Label` field of the generated agent plist.
    pub label: String,
    /// First element of the `ProgramArguments` invocation prefix.
    pub shell: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            label: "environment".to_string(),
            shell: "sh".to_string(),
        }
    }
}
