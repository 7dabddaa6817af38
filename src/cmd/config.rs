// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Config-related commands for macgoenv-rs.

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}
