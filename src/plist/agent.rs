// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Launch agent record.
//!
//! The agent's `ProgramArguments` list is always a shell invocation prefix
//! (`["sh", "-c"]`) followed by one `launchctl setenv NAME VALUE` statement
//! per variable. Reading an existing file back recovers variables by matching
//! that statement shape; every other argument is ignored.

use anyhow::Context;
use regex::Regex;
use std::path::Path;

use crate::core::env::EnvSet;
use crate::error::{FsError, PlistError, Result};

/// Formats one `launchctl setenv` statement for the agent's argument list.
#[must_use]
pub fn setenv_statement(name: &str, value: &str) -> String {
    format!("launchctl setenv {name} {value}")
}

/// Launch agent property-list record.
///
/// Constructed fresh on every run from the configured label, shell and
/// environment set; an existing file is only read to recover previously
/// stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchAgent {
    label: String,
    program_arguments: Vec<String>,
    run_at_load: bool,
}

impl LaunchAgent {
    /// Builds the agent record for the given environment set.
    ///
    /// The argument list is `[shell, "-c"]` followed by one setter statement
    /// per variable, in sorted key order. `RunAtLoad` is always true.
    #[must_use]
    pub fn from_env(label: &str, shell: &str, env: &EnvSet) -> Self {
        let mut program_arguments = vec![shell.to_string(), "-c".to_string()];
        for (name, value) in env.iter() {
            program_arguments.push(setenv_statement(name, value));
        }

        Self {
            label: label.to_string(),
            program_arguments,
            run_at_load: true,
        }
    }

    /// Returns the agent label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the full `ProgramArguments` list.
    #[must_use]
    pub fn program_arguments(&self) -> &[String] {
        &self.program_arguments
    }

    /// Returns the `RunAtLoad` flag.
    #[must_use]
    pub const fn run_at_load(&self) -> bool {
        self.run_at_load
    }

    /// Recovers the environment set from the argument list.
    ///
    /// Each argument matching `launchctl setenv NAME VALUE` contributes one
    /// entry; anything else (the shell prefix included) is skipped with a
    /// debug log.
    ///
    /// # Errors
    ///
    /// Returns an error if the setter-statement regex fails to compile.
    pub fn environment(&self) -> Result<EnvSet> {
        let regex = Regex::new(r"(?s)^launchctl setenv (\S+) (.*)$")
            .with_context(|| "failed to compile setenv statement regex")?;

        let mut env = EnvSet::new();
        for argument in &self.program_arguments {
            if let Some(captures) = regex.captures(argument) {
                env.set(&captures[1], &captures[2]);
            } else {
                tracing::debug!(argument = %argument, "skipping non-setter program argument");
            }
        }
        Ok(env)
    }

    /// Renders the record as XML property-list text.
    #[must_use]
    pub fn render(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::from(super::PLIST_PROLOG);
        let _ = writeln!(out, "\t<key>Label</key>");
        let _ = writeln!(out, "\t<string>{}</string>", self.label);
        let _ = writeln!(out, "\t<key>ProgramArguments</key>");
        let _ = writeln!(out, "\t<array>");
        for argument in &self.program_arguments {
            let _ = writeln!(out, "\t\t<string>{argument}</string>");
        }
        let _ = writeln!(out, "\t</array>");
        let _ = writeln!(out, "\t<key>RunAtLoad</key>");
        let _ = writeln!(out, "\t<{}/>", if self.run_at_load { "true" } else { "false" });
        out.push_str(super::PLIST_EPILOG);
        out
    }

    /// Parses an agent record from property-list text.
    ///
    /// `path` is used for diagnostics only. The text is malformed if the
    /// `<plist>` root or the `ProgramArguments` array is missing; a missing
    /// `Label` or `RunAtLoad` is tolerated (empty label, false flag).
    ///
    /// # Errors
    ///
    /// Returns a [`PlistError::Malformed`] describing the first structural
    /// problem found.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let malformed = |reason: &str| PlistError::Malformed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        if !text.contains("<plist") {
            return Err(malformed("missing <plist> root element").into());
        }

        let array_regex = Regex::new(r"(?s)<key>ProgramArguments</key>\s*<array>(.*?)</array>")
            .with_context(|| "failed to compile ProgramArguments regex")?;
        let Some(array) = array_regex.captures(text) else {
            return Err(malformed("missing ProgramArguments array").into());
        };

        let string_regex = Regex::new(r"<string>([^<]*)</string>")
            .with_context(|| "failed to compile string element regex")?;
        let program_arguments = string_regex
            .captures_iter(&array[1])
            .map(|captures| captures[1].to_string())
            .collect();

        let label_regex = Regex::new(r"<key>Label</key>\s*<string>([^<]*)</string>")
            .with_context(|| "failed to compile Label regex")?;
        let label = label_regex
            .captures(text)
            .map_or_else(String::new, |captures| captures[1].to_string());

        let run_at_load_regex = Regex::new(r"<key>RunAtLoad</key>\s*<true\s*/>")
            .with_context(|| "failed to compile RunAtLoad regex")?;
        let run_at_load = run_at_load_regex.is_match(text);

        Ok(Self {
            label,
            program_arguments,
            run_at_load,
        })
    }

    /// Reads and parses an agent record from a file.
    ///
    /// Returns `Ok(None)` if the file does not exist. A file that exists but
    /// cannot be read or parsed is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is malformed.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no existing launch agent file");
            return Ok(None);
        }

        let text = std::fs::read_to_string(path).map_err(|e| FsError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let agent = Self::parse(&text, path)?;
        tracing::debug!(
            path = %path.display(),
            arguments = agent.program_arguments.len(),
            "read existing launch agent file"
        );
        Ok(Some(agent))
    }
}
