// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! `launchctl` wrapper.
//!
//! Reloading an agent is `unload` followed by `load` on the same plist path.
//! The unload step fails when the agent was never loaded (a fresh machine),
//! so its exit status is tolerated and only logged; the load step must
//! succeed.

use std::path::{Path, PathBuf};

use crate::core::process::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::Result;


/// Default absolute path used when PATH lookup fails.
const LAUNCHCTL_PATH: &str = "/bin/launchctl";

/// Wrapper around the `launchctl` service control command.
#[derive(Debug, Clone)]
pub struct Launchctl {
    program: PathBuf,
}

impl Launchctl {
    /// Creates a wrapper resolving `launchctl` through PATH, falling back to
    /// its standard absolute location.
    #[must_use]
    pub fn new() -> Self {
        let program = ProcessBuilder::find("launchctl")
            .unwrap_or_else(|| PathBuf::from(LAUNCHCTL_PATH));
        Self { program }
    }

    /// Creates a wrapper around a specific control executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the control executable path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Runs `launchctl unload <plist>`.
    ///
    /// A non-zero exit is not an error; the returned output carries the exit
    /// code for the caller to inspect.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned.
    pub fn unload(&self, plist: &Path) -> Result<ProcessOutput> {
        ProcessBuilder::new(&self.program)
            .arg("unload")
            .arg(plist.display().to_string())
            .flags(ProcessFlags::ALLOW_FAILURE)
            .run()
    }

    /// Runs `launchctl load <plist>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exits non-zero.
    pub fn load(&self, plist: &Path) -> Result<ProcessOutput> {
        ProcessBuilder::new(&self.program)
            .arg("load")
            .arg(plist.display().to_string())
            .run()
    }

    /// Reloads the agent at `plist`: unload, then load.
    ///
    /// An unload failure is logged as a warning and the load step still runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the load step fails.
    pub fn reload(&self, plist: &Path) -> Result<()> {
        let unload = self.unload(plist)?;
        if !unload.success() {
            tracing::warn!(
                code = unload.exit_code(),
                stderr = %unload.stderr().trim(),
                "launchctl unload failed; loading anyway"
            );
        }

        self.load(plist)?;
        tracing::debug!(plist = %plist.display(), "launch agent reloaded");
        Ok(())
    }
}

impl Default for Launchctl {
    fn default() -> Self {
        Self::new()
    }
}
