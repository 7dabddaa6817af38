// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Core modules for environment capture, interactive prompting and
//! process execution.
//!
//! ```text
//!            core
//!             |
//!     +-------+-------+
//!     |       |       |
//!     v       v       v
//!    env   prompt  process
//!     |       |       |
//!  EnvSet  read_   Builder
//!  seed    value   Output
//! ```

pub mod env;
pub mod process;
pub mod prompt;
