// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

use std::io::Cursor;
use std::path::Path;

use crate::cmd::agent::write_agent_plist;
use crate::cmd::legacy::write_legacy_plist;
use crate::cmd::resolve_value;
use crate::config::Config;
use crate::core::env::EnvSet;
use crate::plist::agent::LaunchAgent;

/// Config rooted at a scratch home directory, paths resolved.
fn test_config(home: &Path) -> Config {
    let mut config = Config::default();
    config.paths.home = Some(home.to_path_buf());
    config.paths.resolve().unwrap();
    config
}

#[test]
fn test_resolve_value_seed_wins() {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();

    let value = resolve_value("/seed", Some("/stored"), "p: ", &mut input, &mut output).unwrap();
    assert_eq!(value, "/seed");
    assert!(output.is_empty());
}

#[test]
fn test_resolve_value_stored_when_seed_empty() {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();

    let value = resolve_value("", Some("/stored"), "p: ", &mut input, &mut output).unwrap();
    assert_eq!(value, "/stored");
    assert!(output.is_empty());
}

#[test]
fn test_resolve_value_empty_stored_prompts() {
    let mut input = Cursor::new(b"typed\n".to_vec());
    let mut output = Vec::new();

    let value = resolve_value("", Some(""), "P: ", &mut input, &mut output).unwrap();
    assert_eq!(value, "typed\n");
    assert_eq!(output, b"P: ");
}

#[test]
fn test_resolve_value_prompts_when_nothing_available() {
    let mut input = Cursor::new(b"/from/prompt\n".to_vec());
    let mut output = Vec::new();

    let value = resolve_value("", None, "P: ", &mut input, &mut output).unwrap();
    assert_eq!(value, "/from/prompt\n");
}

#[test]
fn test_write_legacy_plist_with_seed() {
    let home = tempfile::tempdir().unwrap();
    let config = test_config(home.path());

    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let path = write_legacy_plist(&config, "/go/path", &mut input, &mut output).unwrap();

    assert_eq!(path, home.path().join(".MacOSX").join("environment.plist"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\t<key>GOPATH</key>\n"));
    assert!(contents.contains("\t<string>/go/path</string>\n"));
    assert!(output.is_empty());
}

#[test]
fn test_write_legacy_plist_prompts_on_empty_seed() {
    let home = tempfile::tempdir().unwrap();
    let config = test_config(home.path());

    let mut input = Cursor::new(b"/typed/path\n".to_vec());
    let mut output = Vec::new();
    let path = write_legacy_plist(&config, "", &mut input, &mut output).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    // The prompted line is stored untrimmed, newline included.
    assert!(contents.contains("\t<string>/typed/path\n</string>\n"));
    assert_eq!(output, b"Enter desired Go path (GOPATH): ");
}

#[test]
fn test_write_agent_plist_fresh() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library")).unwrap();
    let config = test_config(home.path());

    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let path = write_agent_plist(&config, "/go/path", &mut input, &mut output).unwrap();

    assert_eq!(
        path,
        home.path()
            .join("Library")
            .join("LaunchAgents")
            .join("environment.plist")
    );
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\t<string>environment</string>\n"));
    assert!(contents.contains("\t\t<string>sh</string>\n"));
    assert!(contents.contains("\t\t<string>-c</string>\n"));
    assert!(contents.contains("\t\t<string>launchctl setenv GOPATH /go/path</string>\n"));
    assert!(contents.contains("\t<true/>\n"));
}

#[test]
fn test_write_agent_plist_recovers_stored_value() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library").join("LaunchAgents")).unwrap();
    let config = test_config(home.path());

    let mut env = EnvSet::new();
    env.set("GOPATH", "/old/path");
    let existing = LaunchAgent::from_env("environment", "sh", &env);
    let plist_path = home
        .path()
        .join("Library")
        .join("LaunchAgents")
        .join("environment.plist");
    std::fs::write(&plist_path, existing.render()).unwrap();

    // Empty seed and empty input: only the recovered value can supply this.
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let path = write_agent_plist(&config, "", &mut input, &mut output).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("launchctl setenv GOPATH /old/path"));
    assert!(output.is_empty());
}

#[test]
fn test_write_agent_plist_seed_overrides_stored() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library").join("LaunchAgents")).unwrap();
    let config = test_config(home.path());

    let mut env = EnvSet::new();
    env.set("GOPATH", "/old/path");
    let existing = LaunchAgent::from_env("environment", "sh", &env);
    let plist_path = home
        .path()
        .join("Library")
        .join("LaunchAgents")
        .join("environment.plist");
    std::fs::write(&plist_path, existing.render()).unwrap();

    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    write_agent_plist(&config, "/new/path", &mut input, &mut output).unwrap();

    let contents = std::fs::read_to_string(&plist_path).unwrap();
    assert!(contents.contains("launchctl setenv GOPATH /new/path"));
    assert!(!contents.contains("/old/path"));
}

#[test]
fn test_write_agent_plist_malformed_existing_is_error() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library").join("LaunchAgents")).unwrap();
    let config = test_config(home.path());

    let plist_path = home
        .path()
        .join("Library")
        .join("LaunchAgents")
        .join("environment.plist");
    std::fs::write(&plist_path, "not a plist at all").unwrap();

    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let err = write_agent_plist(&config, "/go", &mut input, &mut output).unwrap_err();
    assert!(err.to_string().contains("malformed plist"));
}

#[test]
fn test_write_agent_plist_custom_variable_and_label() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("Library")).unwrap();
    let mut config = test_config(home.path());
    config.env.variable = "GOBIN".to_string();
    config.agent.label = "org.go.env".to_string();

    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let path = write_agent_plist(&config, "/go/bin", &mut input, &mut output).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\t<string>org.go.env</string>\n"));
    assert!(contents.contains("launchctl setenv GOBIN /go/bin"));
}
