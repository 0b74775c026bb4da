//! CLI support for docpath
//!
//! Provides programmatic access to docpath CLI functionality for embedding
//! in other tools.

mod check;
mod convert;
mod tokens;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use convert::{node_to_json, tree_to_json};
pub use tokens::execute_tokens;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Parser error
    Parse(crate::ParseError),
    /// Tokenizer error
    Lex(crate::LexError),
    /// IO error
    Io(io::Error),
    /// No template provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Lex(e) => write!(f, "Lex error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No template provided. Pass one as an argument or pipe it to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Lex(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Lex(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
