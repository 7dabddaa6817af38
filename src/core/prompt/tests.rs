// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

use super::read_value;
use std::io::Cursor;

#[test]
fn test_read_value_keeps_trailing_newline() {
    let mut input = Cursor::new(b"/Users/dev/go\n".to_vec());
    let mut output = Vec::new();

    let value = read_value(&mut input, &mut output, "Enter desired Go path (GOPATH): ")
        .expect("read succeeds");

    assert_eq!(value, "/Users/dev/go\n");
}

#[test]
fn test_read_value_does_not_trim_whitespace() {
    let mut input = Cursor::new(b"  /go path \n".to_vec());
    let mut output = Vec::new();

    let value = read_value(&mut input, &mut output, "? ").expect("read succeeds");

    assert_eq!(value, "  /go path \n");
}

#[test]
fn test_prompt_written_verbatim_without_newline() {
    let mut input = Cursor::new(b"x\n".to_vec());
    let mut output = Vec::new();

    read_value(&mut input, &mut output, "Enter desired Go path (GOPATH): ")
        .expect("read succeeds");

    assert_eq!(output, b"Enter desired Go path (GOPATH): ");
}

#[test]
fn test_end_of_input_returns_partial_line() {
    let mut input = Cursor::new(b"no-newline".to_vec());
    let mut output = Vec::new();

    let value = read_value(&mut input, &mut output, "? ").expect("read succeeds");

    assert_eq!(value, "no-newline");
}

#[test]
fn test_empty_input_returns_empty_string() {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();

    let value = read_value(&mut input, &mut output, "? ").expect("read succeeds");

    assert_eq!(value, "");
}

#[test]
fn test_only_first_line_is_consumed() {
    let mut input = Cursor::new(b"first\nsecond\n".to_vec());
    let mut output = Vec::new();

    let value = read_value(&mut input, &mut output, "? ").expect("read succeeds");

    assert_eq!(value, "first\n");
}
