// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Environment variable set.
//!
//! # Architecture
//!
//! ```text
//! EnvSet (BTreeMap<String, String>)
//! Sources: seed_value(), launch agent read-back, prompt
//! Sorted iteration => deterministic plist output
//! ```

use std::collections::BTreeMap;


/// A set of environment variables destined for a plist record.
///
/// Backed by a `BTreeMap` so iteration order (and therefore the synthesized
/// statement order in the launch agent) is stable across runs. In practice the
/// set holds the single configured variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSet {
    vars: BTreeMap<String, String>,
}

impl EnvSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates a set from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns an iterator over variables in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }
}

/// Reads the seed value for a variable from the process environment.
///
/// An unset variable and an empty one are treated the same; both yield an
/// empty string, which the pipeline treats as "ask the user".
#[must_use]
pub fn seed_value(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
