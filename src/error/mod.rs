// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Error handling module.
//!
//! ```text
//!          MacgoenvError (~24 bytes)
//!                  |
//!     +------+-----+------+------+
//!     |      |     |      |      |
//!     v      v     v      v      v
//!    Cfg   Plist  Proc   Fs   Io/Other
//!    Box    Box   Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  MissingKey, InvalidValue
//!   Plist   Malformed
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs      CreateDir, WriteFile, ReadFile
//!
//! All variants boxed => MacgoenvError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MacgoenvError`].
pub type MacgoenvResult<T> = std::result::Result<T, MacgoenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MacgoenvError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Property-list error.
    #[error("plist error: {0}")]
    Plist(#[from] Box<PlistError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MacgoenvError {
                fn from(err: $error) -> Self {
                    MacgoenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    PlistError => Plist,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Plist Errors ---

/// Property-list parsing errors.
///
/// Only the launch agent file is ever parsed back; the legacy dictionary is
/// write-only. A file that exists but cannot be understood is fatal.
#[derive(Debug, Error)]
pub enum PlistError {
    /// File exists but does not have the expected structure.
    #[error("malformed plist '{path}': {reason}")]
    Malformed { path: String, reason: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Directory creation failed.
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File creation or write failed.
    #[error("could not create '{path}' file: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File read failed.
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
