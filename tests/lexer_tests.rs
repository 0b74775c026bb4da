// tests/lexer_tests.rs

use docpath::ast::Token;
use docpath::lexer::{LexError, Lexer};

fn tokens(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut out = vec![];
    loop {
        let token = lexer.next_token().unwrap();
        let done = token == Token::Eof;
        out.push(token);
        if done {
            break;
        }
    }
    out
}

// ============================================================================
// Expression-Mode Punctuation
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        (".", Token::Dot),
        ("*", Token::Star),
        ("[", Token::LBracket),
        ("]", Token::RBracket),
        ("(", Token::LParen),
        (")", Token::RParen),
        ("?", Token::Question),
        (",", Token::Comma),
        (":", Token::Colon),
        ("$", Token::Dollar),
        ("@", Token::At),
        ("^", Token::Caret),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(&format!("{{{}}}", input));
        assert_eq!(lexer.next_token(), Ok(Token::LBrace));
        assert_eq!(lexer.next_token(), Ok(expected), "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Ok(Token::RBrace));
        assert_eq!(lexer.next_token(), Ok(Token::Eof));
    }
}

#[test]
fn test_dot_dot() {
    assert_eq!(
        tokens("{..}"),
        vec![Token::LBrace, Token::DotDot, Token::RBrace, Token::Eof]
    );
}

// ============================================================================
// Text Mode
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(tokens(""), vec![Token::Eof]);
}

#[test]
fn test_plain_text_only() {
    assert_eq!(
        tokens("no selectors here"),
        vec![Token::Text("no selectors here".to_string()), Token::Eof]
    );
}

#[test]
fn test_text_around_expression() {
    assert_eq!(
        tokens("a{.b}c"),
        vec![
            Token::Text("a".to_string()),
            Token::LBrace,
            Token::Dot,
            Token::Identifier("b".to_string()),
            Token::RBrace,
            Token::Text("c".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_closing_brace_in_text_is_literal() {
    assert_eq!(
        tokens("a}b"),
        vec![Token::Text("a}b".to_string()), Token::Eof]
    );
}

#[test]
fn test_whitespace_preserved_in_text_but_skipped_in_expressions() {
    assert_eq!(
        tokens("  x  { . kind }"),
        vec![
            Token::Text("  x  ".to_string()),
            Token::LBrace,
            Token::Dot,
            Token::Identifier("kind".to_string()),
            Token::RBrace,
            Token::Eof,
        ]
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("42", Token::Integer(42)),
        ("0", Token::Integer(0)),
        ("-7", Token::Integer(-7)),
        ("3.14", Token::Float(3.14)),
        ("-0.5", Token::Float(-0.5)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(&format!("{{{}}}", input));
        assert_eq!(lexer.next_token(), Ok(Token::LBrace));
        assert_eq!(lexer.next_token(), Ok(expected), "Failed for input: {}", input);
    }
}

#[test]
fn test_integer_followed_by_dot_is_not_a_float() {
    // `[1.]` is an index and a trailing dot, not a float
    assert_eq!(
        tokens("{[1.kind]}"),
        vec![
            Token::LBrace,
            Token::LBracket,
            Token::Integer(1),
            Token::Dot,
            Token::Identifier("kind".to_string()),
            Token::RBracket,
            Token::RBrace,
            Token::Eof,
        ]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_quoted_strings() {
    let test_cases = vec![
        ("'simple'", "simple"),
        ("\"double\"", "double"),
        ("'with space'", "with space"),
        ("'esc\\n'", "esc\n"),
        ("'quo\\''", "quo'"),
        ("\"quo\\\"\"", "quo\""),
        ("'back\\\\slash'", "back\\slash"),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(&format!("{{{}}}", input));
        assert_eq!(lexer.next_token(), Ok(Token::LBrace));
        assert_eq!(
            lexer.next_token(),
            Ok(Token::String(expected.to_string())),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("{'open");
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnterminatedString { position: 1 })
    );
}

#[test]
fn test_invalid_escape() {
    let mut lexer = Lexer::new("{'bad\\q'}");
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::InvalidEscape { ch: 'q', .. })
    ));
}

// ============================================================================
// Identifiers and Keywords
// ============================================================================

#[test]
fn test_keywords() {
    assert_eq!(
        tokens("{true false}"),
        vec![
            Token::LBrace,
            Token::Boolean(true),
            Token::Boolean(false),
            Token::RBrace,
            Token::Eof,
        ]
    );
}

#[test]
fn test_identifiers() {
    let test_cases = vec!["items", "item_count", "_internal", "first-name", "a1"];

    for input in test_cases {
        let mut lexer = Lexer::new(&format!("{{{}}}", input));
        assert_eq!(lexer.next_token(), Ok(Token::LBrace));
        assert_eq!(
            lexer.next_token(),
            Ok(Token::Identifier(input.to_string())),
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_operators_kept_verbatim() {
    let test_cases = vec!["==", "!=", "<", "<=", ">", ">=", "=~", "!~"];

    for input in test_cases {
        let mut lexer = Lexer::new(&format!("{{{}}}", input));
        assert_eq!(lexer.next_token(), Ok(Token::LBrace));
        assert_eq!(
            lexer.next_token(),
            Ok(Token::Operator(input.to_string())),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unknown_operator_spelling_still_lexes() {
    // the lexer holds no operator table; `=<` is somebody else's problem
    let mut lexer = Lexer::new("{=<}");
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(lexer.next_token(), Ok(Token::Operator("=<".to_string())));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unexpected_char() {
    let mut lexer = Lexer::new("{#}");
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedChar { ch: '#', position: 1 })
    );
}

#[test]
fn test_nested_open_brace_rejected() {
    let mut lexer = Lexer::new("{{");
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedChar { ch: '{', position: 1 })
    );
}
