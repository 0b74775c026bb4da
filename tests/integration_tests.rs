// tests/integration_tests.rs
//
// End-to-end: template text in, rendered tree out.

#![cfg(feature = "cli")]

use docpath::cli::{self, CheckOptions, CheckResult, CliError};
use docpath::output::outline;
use docpath::parser::parse_template;
use serde_json::json;

// ============================================================================
// Parse + outline
// ============================================================================

#[test]
fn test_outline_of_filtered_selection() {
    let root = parse_template("pods: {.items[?(@.status == 'Running')].name}").unwrap();

    let expected = [
        "Sequence",
        "  Text: pods: ",
        "  Sequence",
        "    Field: items",
        "    Filter: Sequence == Sequence",
        "      Sequence",
        "        Field: status",
        "      Sequence",
        "        Text: Running",
        "    Field: name",
    ]
    .join("\n");
    assert_eq!(outline(&root), expected);
}

#[test]
fn test_outline_of_union() {
    let root = parse_template("{.items[0,1]}").unwrap();

    let expected = [
        "Sequence",
        "  Sequence",
        "    Field: items",
        "    Union",
        "      Sequence",
        "        Array: [0:1:1]",
        "      Sequence",
        "        Array: [1:2:1]",
    ]
    .join("\n");
    assert_eq!(outline(&root), expected);
}

#[test]
fn test_outline_custom_indent() {
    let root = parse_template("{.a}").unwrap();
    let text = docpath::output::OutlinePrinter::with_indent(4).print(&root);
    assert_eq!(text, "Sequence\n    Sequence\n        Field: a");
}

#[test]
fn test_outline_of_range_template() {
    let root = parse_template("{range .items[*]}{.name} {end}").unwrap();
    let text = outline(&root);

    assert!(text.contains("Identifier: range"));
    assert!(text.contains("Wildcard"));
    assert!(text.contains("Identifier: end"));
}

// ============================================================================
// Parse + JSON dump
// ============================================================================

#[test]
fn test_tree_to_json() {
    let root = parse_template("{.a[0]}").unwrap();

    assert_eq!(
        cli::tree_to_json(&root),
        json!({
            "kind": "Sequence",
            "nodes": [{
                "kind": "Sequence",
                "nodes": [
                    { "kind": "Field", "name": "a" },
                    {
                        "kind": "Array",
                        "start": { "value": 0, "known": true, "derived": false },
                        "end": { "value": 1, "known": true, "derived": true },
                        "step": { "value": 1, "known": true, "derived": true },
                    },
                ],
            }],
        })
    );
}

#[test]
fn test_filter_json_includes_both_operands() {
    let root = parse_template("{.items[?(@.ok)]}").unwrap();
    let value = cli::tree_to_json(&root);

    let filter = &value["nodes"][0]["nodes"][1];
    assert_eq!(filter["kind"], "Filter");
    assert_eq!(filter["operator"], "exists");
    assert_eq!(filter["left"]["nodes"][0]["name"], "ok");
    assert_eq!(filter["right"]["nodes"], json!([]));
}

// ============================================================================
// CLI entry points
// ============================================================================

#[test]
fn test_execute_check_syntax_only() {
    let options = CheckOptions {
        template: "{.kind}".to_string(),
        json: false,
        syntax_only: true,
    };
    assert!(matches!(
        cli::execute_check(&options),
        Ok(CheckResult::SyntaxValid)
    ));
}

#[test]
fn test_execute_check_outline() {
    let options = CheckOptions {
        template: "{.kind}".to_string(),
        json: false,
        syntax_only: false,
    };
    match cli::execute_check(&options) {
        Ok(CheckResult::Outline(text)) => assert!(text.contains("Field: kind")),
        other => panic!("expected outline, got {:?}", other),
    }
}

#[test]
fn test_execute_check_json() {
    let options = CheckOptions {
        template: "{.kind}".to_string(),
        json: true,
        syntax_only: false,
    };
    match cli::execute_check(&options) {
        Ok(CheckResult::Json(value)) => {
            assert_eq!(value["nodes"][0]["nodes"][0]["name"], "kind");
        }
        other => panic!("expected json, got {:?}", other),
    }
}

#[test]
fn test_execute_check_reports_parse_errors() {
    let options = CheckOptions {
        template: "{.items[".to_string(),
        json: false,
        syntax_only: true,
    };
    assert!(matches!(
        cli::execute_check(&options),
        Err(CliError::Parse(_))
    ));
}

#[test]
fn test_execute_tokens() {
    let lines = cli::execute_tokens("x{*}").unwrap();
    assert_eq!(
        lines,
        vec!["Text(\"x\")", "LBrace", "Star", "RBrace", "Eof"]
    );
}

#[test]
fn test_execute_tokens_surfaces_lex_errors() {
    assert!(matches!(
        cli::execute_tokens("{'open"),
        Err(CliError::Lex(_))
    ));
}
