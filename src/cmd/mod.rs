// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   legacy, agent, options
//! ```

pub mod agent;
pub mod config;
pub mod legacy;

#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};

use crate::core::prompt;
use crate::error::Result;

/// Message printed when the host is not a Mac.
pub const PLATFORM_MISMATCH: &str = "Error: this program only runs on the Mac.";

/// True when the host OS can consume the written configuration.
#[must_use]
pub const fn platform_supported() -> bool {
    cfg!(target_os = "macos")
}

/// Picks the value to persist.
///
/// The seed wins when non-empty, then a previously stored value, then one
/// line read interactively (kept verbatim, terminator included).
pub(crate) fn resolve_value<R, W>(
    seed: &str,
    stored: Option<&str>,
    prompt_text: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    if !seed.is_empty() {
        tracing::debug!("using seed value from the process environment");
        return Ok(seed.to_string());
    }

    if let Some(value) = stored.filter(|v| !v.is_empty()) {
        tracing::debug!("reusing previously stored value");
        return Ok(value.to_string());
    }

    prompt::read_value(input, output, prompt_text)
}
