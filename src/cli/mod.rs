// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! CLI module for macgoenv-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! macgoenv [global options] <command>
//! legacy
//! agent
//! options
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// macOS GUI Environment Setter - Rust Port
///
/// Persists a Go workspace path for GUI-launched macOS applications.
#[derive(Debug, Parser)]
#[command(
    name = "macgoenv",
    author,
    version,
    about = "macOS GUI environment setter",
    long_about = "macgoenv-rs Copyright (C) 2026 macgoenv-rs contributors\n\
                  Licensed under the MIT license; see LICENSE for details.\n\n\
                  Persists an environment variable (GOPATH by default) so that\n\
                  GUI-launched macOS applications can see it. `macgoenv legacy`\n\
                  writes the old per-user session dictionary, which applies at\n\
                  the next login. `macgoenv agent` writes a launch agent and\n\
                  reloads it via launchctl, applying the change immediately.\n\
                  See `macgoenv <command> --help` for more information about\n\
                  a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, macgoenv looks for `macgoenv.toml` in the current\n\
                  directory and loads it when present. Additional TOML files can\n\
                  be specified with --config; those are loaded afterwards and\n\
                  override it. MACGOENV_* environment variables and\n\
                  --set KEY=VALUE overrides are applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Writes ~/.MacOSX/environment.plist (takes effect at next login).
    Legacy,

    /// Writes the launch agent plist and reloads it via launchctl.
    Agent,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
