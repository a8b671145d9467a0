//! User input utilities for the interactive search prompt

use crate::{Error, Result};
use std::io::{self, Write};

/// Print a prompt and read one line from standard input
///
/// Returns `None` when the input stream is closed (end of input), which
/// callers should treat as a request to exit.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(input))
}
