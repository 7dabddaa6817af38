// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Utility modules.
//!
//! ```text
//! fs
//!   ensure_private_dir()  create with owner-only access (0700)
//!   write_replace()       full-overwrite file write
//! ```

pub mod fs;
