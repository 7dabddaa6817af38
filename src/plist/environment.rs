// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Legacy environment dictionary record.
//!
//! The session manager reads `~/.MacOSX/environment.plist` at login as a flat
//! string dictionary. The file is write-only from our side; it is never parsed
//! back.

use crate::core::env::EnvSet;

/// Renderer for the legacy `environment.plist` dictionary.
#[derive(Debug)]
pub struct EnvironmentPlist<'a> {
    env: &'a EnvSet,
}

impl<'a> EnvironmentPlist<'a> {
    /// Creates a renderer over the given environment set.
    #[must_use]
    pub const fn new(env: &'a EnvSet) -> Self {
        Self { env }
    }

    /// Renders the dictionary as XML property-list text.
    ///
    /// One `<key>`/`<string>` pair per entry, tab-indented, in sorted key
    /// order. Values pass through verbatim, trailing newlines included.
    #[must_use]
    pub fn render(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::from(super::PLIST_PROLOG);
        for (key, value) in self.env.iter() {
            let _ = writeln!(out, "\t<key>{key}</key>");
            let _ = writeln!(out, "\t<string>{value}</string>");
        }
        out.push_str(super::PLIST_EPILOG);
        out
    }
}
