//! `gib lex`: tokenize a file and display the tokens.

use gib_ir::Token;
use std::fmt::Write as _;

use super::{read_source, STDIN_PATH};
use crate::DriverError;

/// How `gib lex` prints tokens.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line, for people.
    #[default]
    Text,
    /// A JSON array of tokens, for tools.
    Json,
}

/// Lex the file at `path` and render its tokens.
#[tracing::instrument(level = "debug", skip(format))]
pub fn lex_file(path: &str, format: OutputFormat) -> Result<String, DriverError> {
    let source = read_source(path)?;
    let tokens = gib_lexer::lex(&source)?;
    let label = if path == STDIN_PATH { "<stdin>" } else { path };
    render(label, &tokens, format)
}

/// Render tokens in the requested format. Output ends with a newline.
pub fn render(label: &str, tokens: &[Token], format: OutputFormat) -> Result<String, DriverError> {
    match format {
        OutputFormat::Text => {
            let mut out = format!("Tokens for '{label}' ({} tokens):\n", tokens.len());
            for tok in tokens {
                // Writing to a String cannot fail.
                let _ = writeln!(out, "  {tok}");
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
            Ok(out)
        }
    }
}
