// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Interactive prompt for a missing value.
//!
//! ```text
//! read_value(stdin, stdout, "Enter desired Go path (GOPATH): ")
//!   output: prompt, flushed, no newline
//!   input:  one blocking line read
//!   result: the line verbatim, trailing terminator included
//! ```

use std::io::{BufRead, Write};

use crate::error::Result;

/// Prints `prompt` to `output`, flushes, and reads one line from `input`.
///
/// Blocks until a line (or end of input) arrives; there is no timeout and no
/// cancellation. The returned value keeps its trailing line terminator; the
/// stored value is the line verbatim, untrimmed. At end of input the partial
/// line (possibly empty) is returned without error.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the line fails.
pub fn read_value<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests;
