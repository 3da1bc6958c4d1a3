//! Command handlers for the `gib` CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! [`read_source`] live here in the module root.

use std::io::{self, Read};

use crate::DriverError;

mod lex;

pub use lex::{lex_file, render, OutputFormat};

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a source file, or standard input when `path` is [`STDIN_PATH`].
pub fn read_source(path: &str) -> Result<String, DriverError> {
    if path == STDIN_PATH {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| DriverError::read("<stdin>", e))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| DriverError::read(path, e))
}
