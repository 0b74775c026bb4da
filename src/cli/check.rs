//! Parse templates and report on the resulting tree

use super::{tree_to_json, CliError};
use crate::{output, parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The path template to parse
    pub template: String,
    /// Print the tree as JSON instead of an outline
    pub json: bool,
    /// Only validate syntax, don't print the tree
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Parse tree rendered as an indented outline
    Outline(String),
    /// Parse tree rendered as JSON
    Json(serde_json::Value),
}

/// Execute a docpath check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let root = parser::parse_template(&options.template).map_err(CliError::Parse)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    if options.json {
        Ok(CheckResult::Json(tree_to_json(&root)))
    } else {
        Ok(CheckResult::Outline(output::outline(&root)))
    }
}
