//! Dump a template's token stream

use super::CliError;
use crate::ast::Token;
use crate::lexer::Lexer;

/// Tokenize a template completely, one rendered token per entry.
///
/// The terminating `Eof` is included so the listing shows where the
/// lexer stopped.
pub fn execute_tokens(template: &str) -> Result<Vec<String>, CliError> {
    let mut lexer = Lexer::new(template);
    let mut rendered = Vec::new();

    loop {
        let token = lexer.next_token().map_err(CliError::Lex)?;
        let done = token == Token::Eof;
        rendered.push(format!("{:?}", token));
        if done {
            break;
        }
    }

    Ok(rendered)
}
