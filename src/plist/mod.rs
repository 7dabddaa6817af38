// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Property-list records.
//!
//! ```text
//!             plist
//!               |
//!        +------+------+
//!        |             |
//!        v             v
//!   environment      agent
//!        |             |
//!  EnvironmentPlist  LaunchAgent
//!  <dict> of         Label
//!  key/string        ProgramArguments
//!  pairs             RunAtLoad
//! ```
//!
//! Both record shapes share the same XML prolog and closing lines. Keys and
//! values are embedded verbatim; no XML escaping is applied.

pub mod agent;
pub mod environment;


/// XML prolog shared by both record shapes, up to and including the opening
/// `<dict>` line.
pub const PLIST_PROLOG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
<plist version=\"1.0\">\n\
<dict>\n";

/// Closing lines shared by both record shapes.
pub const PLIST_EPILOG: &str = "</dict>\n</plist>\n";
