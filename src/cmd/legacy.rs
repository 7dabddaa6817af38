// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Legacy session dictionary command.
//!
//! Writes `~/.MacOSX/environment.plist`, the pre-launchd mechanism read by
//! the session manager at login. The written value only becomes visible to
//! GUI applications after logging out and back in.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::env::{self, EnvSet};
use crate::error::Result;
use crate::plist::environment::EnvironmentPlist;
use crate::utility::fs::{ensure_private_dir, write_replace};

/// Main handler for the `legacy` command.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or the
/// interactive read fails.
pub fn run_legacy_command(config: &Config) -> Result<()> {
    if !super::platform_supported() {
        println!("{}", super::PLATFORM_MISMATCH);
        return Ok(());
    }

    let seed = env::seed_value(&config.env.variable);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let path = write_legacy_plist(config, &seed, &mut stdin.lock(), &mut stdout.lock())?;

    println!("Created '{}' file.", path.display());
    println!("Log out and log back in to take effect.");
    Ok(())
}

/// Ensures the target directory, resolves the value and writes the
/// dictionary file. Returns the written path.
///
/// # Errors
///
/// Returns an error if path resolution, directory creation, the interactive
/// read or the file write fails.
pub fn write_legacy_plist<R, W>(
    config: &Config,
    seed: &str,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    let (dir, path) = config.paths.legacy_plist()?;
    ensure_private_dir(&dir)?;

    let value = super::resolve_value(seed, None, &config.env.prompt, input, output)?;
    let mut env = EnvSet::new();
    env.set(config.env.variable.as_str(), value);

    write_replace(&path, &EnvironmentPlist::new(&env).render())?;
    tracing::info!(
        path = %path.display(),
        variable = %config.env.variable,
        "wrote session environment dictionary"
    );
    Ok(path)
}
