// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Integration tests for the two variant pipelines.
//!
//! Drives the write paths end to end against scratch home directories and
//! substitute control executables.

use macgoenv_rs::cmd::agent::write_agent_plist;
use macgoenv_rs::cmd::legacy::write_legacy_plist;
use macgoenv_rs::config::Config;
use macgoenv_rs::plist::agent::LaunchAgent;
use std::io::Cursor;
use std::path::Path;

/// Config whose paths resolve under a scratch home directory.
fn config_for(home: &Path) -> Config {
    let toml = format!("[paths]\nhome = \"{}\"\n", home.display());
    Config::parse(&toml).unwrap()
}

fn no_input() -> Cursor<Vec<u8>> {
    Cursor::new(Vec::new())
}

// =============================================================================
// Variant A: legacy session dictionary
// =============================================================================

#[test]
fn legacy_writes_exact_file() {
    let home = tempfile::tempdir().unwrap();
    let config = config_for(home.path());

    let mut output = Vec::new();
    let path = write_legacy_plist(&config, "/Users/x/go", &mut no_input(), &mut output).unwrap();

    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
        "<plist version=\"1.0\">\n",
        "<dict>\n",
        "\t<key>GOPATH</key>\n",
        "\t<string>/Users/x/go</string>\n",
        "</dict>\n",
        "</plist>\n",
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn legacy_prompted_value_stored_untrimmed() {
    let home = tempfile::tempdir().unwrap();
    let config = config_for(home.path());

    let mut input = Cursor::new(b"/typed/go\n".to_vec());
    let mut output = Vec::new();
    let path = write_legacy_plist(&config, "", &mut input, &mut output).unwrap();

    assert_eq!(output, b"Enter desired Go path (GOPATH): ");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\t<string>/typed/go\n</string>\n"));
}

#[cfg(unix)]
#[test]
fn legacy_creates_directory_with_owner_access() {
    use std::os::unix::fs::PermissionsExt;

    let home = tempfile::tempdir().unwrap();
    let config = config_for(home.path());

    let mut output = Vec::new();
    write_legacy_plist(&config, "/go", &mut no_input(), &mut output).unwrap();

    let dir = home.path().join(".MacOSX");
    let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);
}

#[test]
fn legacy_overwrites_previous_file() {
    let home = tempfile::tempdir().unwrap();
    let config = config_for(home.path());

    let mut output = Vec::new();
    let path = write_legacy_plist(&config, "/first", &mut no_input(), &mut output).unwrap();
    write_legacy_plist(&config, "/second", &mut no_input(), &mut output).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("/second"));
    assert!(!contents.contains("/first"));
}

// =============================================================================
// Variant B: launch agent
// =============================================================================

#[test]
fn agent_writes_exact_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library")).unwrap();
    let config = config_for(home.path());

    let mut output = Vec::new();
    let path = write_agent_plist(&config, "/Users/x/go", &mut no_input(), &mut output).unwrap();

    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
        "<plist version=\"1.0\">\n",
        "<dict>\n",
        "\t<key>Label</key>\n",
        "\t<string>environment</string>\n",
        "\t<key>ProgramArguments</key>\n",
        "\t<array>\n",
        "\t\t<string>sh</string>\n",
        "\t\t<string>-c</string>\n",
        "\t\t<string>launchctl setenv GOPATH /Users/x/go</string>\n",
        "\t</array>\n",
        "\t<key>RunAtLoad</key>\n",
        "\t<true/>\n",
        "</dict>\n",
        "</plist>\n",
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn agent_rerun_reuses_stored_value() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library")).unwrap();
    let config = config_for(home.path());

    let mut output = Vec::new();
    let path = write_agent_plist(&config, "/foo", &mut no_input(), &mut output).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    // Second run: no seed, no typed input. The stored value carries over and
    // the record is reproduced identically.
    write_agent_plist(&config, "", &mut no_input(), &mut output).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
    assert!(second.contains("launchctl setenv GOPATH /foo"));
    assert!(output.is_empty());
}

#[test]
fn agent_recovery_ignores_foreign_arguments() {
    let home = tempfile::tempdir().unwrap();
    let agents_dir = home.path().join("Library").join("LaunchAgents");
    std::fs::create_dir_all(&agents_dir).unwrap();
    let config = config_for(home.path());

    let existing = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<plist version=\"1.0\">\n",
        "<dict>\n",
        "\t<key>Label</key>\n",
        "\t<string>environment</string>\n",
        "\t<key>ProgramArguments</key>\n",
        "\t<array>\n",
        "\t\t<string>sh</string>\n",
        "\t\t<string>-c</string>\n",
        "\t\t<string>echo not a setter</string>\n",
        "\t\t<string>launchctl setenv GOPATH /stored</string>\n",
        "\t</array>\n",
        "\t<key>RunAtLoad</key>\n",
        "\t<true/>\n",
        "</dict>\n",
        "</plist>\n",
    );
    std::fs::write(agents_dir.join("environment.plist"), existing).unwrap();

    let mut output = Vec::new();
    let path = write_agent_plist(&config, "", &mut no_input(), &mut output).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("launchctl setenv GOPATH /stored"));
    assert!(!contents.contains("echo not a setter"));
}

#[test]
fn agent_malformed_existing_file_is_fatal() {
    let home = tempfile::tempdir().unwrap();
    let agents_dir = home.path().join("Library").join("LaunchAgents");
    std::fs::create_dir_all(&agents_dir).unwrap();
    let config = config_for(home.path());

    std::fs::write(agents_dir.join("environment.plist"), "<html>nope</html>").unwrap();

    let mut output = Vec::new();
    let err = write_agent_plist(&config, "/go", &mut no_input(), &mut output).unwrap_err();
    assert!(err.to_string().contains("malformed plist"));
}

#[test]
fn agent_written_file_parses_back() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library")).unwrap();
    let config = config_for(home.path());

    let mut output = Vec::new();
    let path = write_agent_plist(&config, "/go path/with space", &mut no_input(), &mut output)
        .unwrap();

    let agent = LaunchAgent::from_file(&path).unwrap().unwrap();
    assert_eq!(agent.label(), "environment");
    assert!(agent.run_at_load());
    assert_eq!(
        agent.environment().unwrap().get("GOPATH"),
        Some("/go path/with space")
    );
}

#[cfg(unix)]
#[test]
fn agent_reload_sequences_unload_then_load() {
    use macgoenv_rs::launchd::Launchctl;
    use std::os::unix::fs::PermissionsExt;

    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library")).unwrap();
    let config = config_for(home.path());

    let mut output = Vec::new();
    let path = write_agent_plist(&config, "/go", &mut no_input(), &mut output).unwrap();

    let log = home.path().join("calls.log");
    let script = home.path().join("ctl");
    std::fs::write(&script, format!("#!/bin/sh\necho \"$@\" >> {}\n", log.display())).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    Launchctl::with_program(&script).reload(&path).unwrap();

    let calls = std::fs::read_to_string(&log).unwrap();
    let expected = format!("unload {p}\nload {p}\n", p = path.display());
    assert_eq!(calls, expected);
}

// =============================================================================
// Platform guard
// =============================================================================

#[cfg(not(target_os = "macos"))]
mod guard {
    use super::*;
    use macgoenv_rs::cmd::agent::run_agent_command;
    use macgoenv_rs::cmd::legacy::run_legacy_command;

    #[test]
    fn legacy_command_is_noop_off_mac() {
        let home = tempfile::tempdir().unwrap();
        let config = config_for(home.path());

        run_legacy_command(&config).unwrap();
        assert!(!home.path().join(".MacOSX").exists());
    }

    #[test]
    fn agent_command_is_noop_off_mac() {
        let home = tempfile::tempdir().unwrap();
        let config = config_for(home.path());

        run_agent_command(&config).unwrap();
        assert!(!home.path().join("Library").join("LaunchAgents").exists());
    }
}
