// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Launch agent command.
//!
//! Writes `~/Library/LaunchAgents/environment.plist` and reloads it through
//! `launchctl`, so the variable reaches the GUI session without logging out.
//! An existing agent file is read first to recover the previously stored
//! value.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::env::{self, EnvSet};
use crate::error::Result;
use crate::launchd::Launchctl;
use crate::plist::agent::LaunchAgent;
use crate::utility::fs::{ensure_private_dir, write_replace};

/// Main handler for the `agent` command.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, an existing
/// file is malformed, the interactive read fails, or the reload's load step
/// fails.
pub fn run_agent_command(config: &Config) -> Result<()> {
    if !super::platform_supported() {
        println!("{}", super::PLATFORM_MISMATCH);
        return Ok(());
    }

    let seed = env::seed_value(&config.env.variable);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let path = write_agent_plist(config, &seed, &mut stdin.lock(), &mut stdout.lock())?;
    println!("Created '{}' file.", path.display());

    Launchctl::new().reload(&path)?;
    println!("Reloaded launch agent '{}'.", config.agent.label);
    Ok(())
}

/// Recovers any stored value, resolves the value to persist, builds the
/// agent record and writes it. Returns the written path.
///
/// Reloading is left to the caller; this function only touches the
/// filesystem.
///
/// # Errors
///
/// Returns an error if path resolution, directory creation, reading or
/// parsing an existing file, the interactive read or the file write fails.
pub fn write_agent_plist<R, W>(
    config: &Config,
    seed: &str,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    let (dir, path) = config.paths.agent_plist()?;
    ensure_private_dir(&dir)?;

    let stored = match LaunchAgent::from_file(&path)? {
        Some(existing) => existing.environment()?,
        None => EnvSet::new(),
    };

    let value = super::resolve_value(
        seed,
        stored.get(&config.env.variable),
        &config.env.prompt,
        input,
        output,
    )?;
    let mut env = EnvSet::new();
    env.set(config.env.variable.as_str(), value);

    let agent = LaunchAgent::from_env(&config.agent.label, &config.agent.shell, &env);
    write_replace(&path, &agent.render())?;
    tracing::info!(
        path = %path.display(),
        label = %config.agent.label,
        "wrote launch agent"
    );
    Ok(path)
}
