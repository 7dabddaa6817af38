// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

use super::{ConfigError, FsError, MacgoenvError, MacgoenvResult, PlistError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "home".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "missing required config key 'home' in section '[paths]'"
    );
}

#[test]
fn test_plist_error_display() {
    let err = PlistError::Malformed {
        path: "/tmp/environment.plist".to_string(),
        reason: "no ProgramArguments array".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "malformed plist '/tmp/environment.plist': no ProgramArguments array"
    );
}

#[test]
fn test_fs_error_wraps_into_top_level() {
    let err: MacgoenvError = FsError::CreateDir {
        path: "/nope".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
    .into();
    assert!(err.to_string().starts_with("filesystem error:"));
}

#[test]
fn test_macgoenv_error_size() {
    // Box<str> variants (Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<MacgoenvError>();
    assert!(size <= 24, "MacgoenvError is {size} bytes, expected <= 24");
}

#[test]
fn test_macgoenv_result_size() {
    let size = std::mem::size_of::<MacgoenvResult<()>>();
    assert!(size <= 24, "MacgoenvResult<()> is {size} bytes, expected <= 24");
}
