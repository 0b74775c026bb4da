use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::{
    ast::{
        ArraySlice, Boolean, Field, Filter, Float, Identifier, Integer, Node, NodeKind, Parent,
        RecursiveDescent, Sequence, SliceParam, Text, Token, Union, Wildcard,
    },
    lexer::{LexError, Lexer},
};

/// Errors produced while building a tree from a template.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenizer failure
    Lex(LexError),

    /// Token with no grammar rule at this point
    UnexpectedToken { found: String, expected: String },

    /// Template ended mid-rule
    UnexpectedEof { expected: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::UnexpectedToken { found, expected } => {
                write!(f, "Unexpected token {}, expected {}", found, expected)
            }
            ParseError::UnexpectedEof { expected } => {
                write!(f, "Unexpected end of template, expected {}", expected)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

/// Parses a template string into its root sequence.
///
/// Convenience over [`Parser`] for the common one-shot case.
pub fn parse_template(input: &str) -> Result<Sequence, ParseError> {
    Parser::new(Lexer::new(input))?.parse()
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(&format!("{:?}", expected)));
        }
        self.advance()
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        if self.current_token == Token::Eof {
            ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseError::UnexpectedToken {
                found: format!("{:?}", self.current_token),
                expected: expected.to_string(),
            }
        }
    }

    /// Parses the whole template.
    ///
    /// The root sequence's children alternate between text runs and one
    /// nested sequence per `{ ... }` block, in source order. The returned
    /// tree is finished: nothing appends to it after this call.
    pub fn parse(&mut self) -> Result<Sequence, ParseError> {
        let mut root = Sequence::new(None);

        loop {
            match mem::replace(&mut self.current_token, Token::Eof) {
                Token::Eof => break,
                Token::Text(text) => {
                    self.advance()?;
                    root.append(Node::Text(Text::new(text, Some(NodeKind::Sequence))));
                }
                Token::LBrace => {
                    self.advance()?;
                    let expr = self.parse_expression()?;
                    self.expect(Token::RBrace)?;
                    trace!("expression block with {} nodes", expr.len());
                    root.append(Node::Sequence(expr));
                }
                token => {
                    self.current_token = token;
                    return Err(self.unexpected("template text or '{'"));
                }
            }
        }

        debug!("parsed template with {} top-level segments", root.len());
        Ok(root)
    }

    /// One `{ ... }` block: an optional keyword-like identifier, an
    /// optional root marker, then a chain of path segments.
    fn parse_expression(&mut self) -> Result<Sequence, ParseError> {
        let mut seq = Sequence::new(Some(NodeKind::Sequence));

        if let Token::Identifier(_) = &self.current_token {
            let name = self.expect_identifier()?;
            seq.append(Node::Identifier(Identifier::new(
                name,
                Some(NodeKind::Sequence),
            )));
        }

        // `$` marks the document root and produces no node
        if self.check(&Token::Dollar) {
            self.advance()?;
        }

        self.parse_segments(&mut seq)?;
        Ok(seq)
    }

    /// Appends path segments to `seq` until no segment-start token remains.
    fn parse_segments(&mut self, seq: &mut Sequence) -> Result<(), ParseError> {
        let parent = Some(NodeKind::Sequence);

        loop {
            match &self.current_token {
                Token::Dot => {
                    self.advance()?;
                    if self.check(&Token::Star) {
                        self.advance()?;
                        seq.append(Node::Wildcard(Wildcard::new(parent)));
                    } else if self.check(&Token::Caret) {
                        self.advance()?;
                        seq.append(Node::Parent(Parent::new(parent)));
                    } else {
                        let name = self.expect_identifier()?;
                        seq.append(Node::Field(Field::new(name, parent)));
                    }
                }
                Token::DotDot => {
                    self.advance()?;
                    seq.append(Node::RecursiveDescent(RecursiveDescent::new(parent)));
                    // `..name` and `..*` select underneath every node
                    if let Token::Identifier(_) = &self.current_token {
                        let name = self.expect_identifier()?;
                        seq.append(Node::Field(Field::new(name, parent)));
                    } else if self.check(&Token::Star) {
                        self.advance()?;
                        seq.append(Node::Wildcard(Wildcard::new(parent)));
                    }
                }
                Token::Star => {
                    self.advance()?;
                    seq.append(Node::Wildcard(Wildcard::new(parent)));
                }
                Token::Caret => {
                    self.advance()?;
                    seq.append(Node::Parent(Parent::new(parent)));
                }
                Token::LBracket => {
                    self.advance()?;
                    self.parse_brackets(seq)?;
                }
                _ => break,
            }
        }

        Ok(())
    }

    /// Bracket selector: one element appends directly, a comma-separated
    /// list becomes a union with one single-node branch per element.
    fn parse_brackets(&mut self, seq: &mut Sequence) -> Result<(), ParseError> {
        let mut elements = vec![self.parse_bracket_element()?];
        while self.check(&Token::Comma) {
            self.advance()?;
            elements.push(self.parse_bracket_element()?);
        }
        self.expect(Token::RBracket)?;

        if elements.len() == 1 {
            seq.append(elements.remove(0));
        } else {
            let branches = elements
                .into_iter()
                .map(|node| {
                    let mut branch = Sequence::new(Some(NodeKind::Union));
                    branch.append(node);
                    branch
                })
                .collect();
            seq.append(Node::Union(Union::new(branches, Some(NodeKind::Sequence))));
        }

        Ok(())
    }

    fn parse_bracket_element(&mut self) -> Result<Node, ParseError> {
        let parent = Some(NodeKind::Sequence);

        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Star => {
                self.advance()?;
                Ok(Node::Wildcard(Wildcard::new(parent)))
            }
            Token::String(name) => {
                self.advance()?;
                Ok(Node::Field(Field::new(name, parent)))
            }
            Token::Question => {
                self.advance()?;
                self.parse_filter()
            }
            token @ (Token::Integer(_) | Token::Colon) => {
                self.current_token = token;
                self.parse_slice()
            }
            token => {
                self.current_token = token;
                Err(self.unexpected("'*', a quoted name, an index, a slice, or '?('"))
            }
        }
    }

    /// Slice parameters fill from exactly the tokens present; a bare
    /// index expands to a one-element range with end and step marked
    /// derived. Negative values stay literal at this layer.
    fn parse_slice(&mut self) -> Result<Node, ParseError> {
        let mut params = [SliceParam::unknown(); 3];
        let mut colons = 0;

        if let Token::Integer(_) = &self.current_token {
            params[0] = SliceParam::literal(self.expect_integer()?);
        }

        while self.check(&Token::Colon) && colons < 2 {
            self.advance()?;
            colons += 1;
            if let Token::Integer(_) = &self.current_token {
                params[colons] = SliceParam::literal(self.expect_integer()?);
            }
        }

        if colons == 0 {
            params[1] = SliceParam::derived(params[0].value + 1);
            params[2] = SliceParam::derived(1);
        }

        Ok(Node::ArraySlice(ArraySlice::new(
            params,
            Some(NodeKind::Sequence),
        )))
    }

    /// Filter predicate body after `?`: a left operand, then either a
    /// comparison operator and right operand, or nothing (an existence
    /// test with the `"exists"` operator and an empty right sequence).
    fn parse_filter(&mut self) -> Result<Node, ParseError> {
        self.expect(Token::LParen)?;

        let left = self.parse_filter_operand()?;

        let (operator, right) = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Operator(op) => {
                self.advance()?;
                (op, self.parse_filter_operand()?)
            }
            token => {
                self.current_token = token;
                ("exists".to_string(), Sequence::new(Some(NodeKind::Filter)))
            }
        };

        self.expect(Token::RParen)?;
        Ok(Node::Filter(Filter::new(
            left,
            right,
            operator,
            Some(NodeKind::Sequence),
        )))
    }

    /// One side of a filter comparison, parsed into its own sequence:
    /// an `@`- or `$`-rooted segment chain, or a single literal.
    fn parse_filter_operand(&mut self) -> Result<Sequence, ParseError> {
        let mut operand = Sequence::new(Some(NodeKind::Filter));
        let parent = Some(NodeKind::Sequence);

        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::At | Token::Dollar => {
                // position marker only; the path itself follows
                self.advance()?;
                self.parse_segments(&mut operand)?;
            }
            Token::Integer(value) => {
                self.advance()?;
                operand.append(Node::Integer(Integer::new(value, parent)));
            }
            Token::Float(value) => {
                self.advance()?;
                operand.append(Node::Float(Float::new(value, parent)));
            }
            Token::Boolean(value) => {
                self.advance()?;
                operand.append(Node::Boolean(Boolean::new(value, parent)));
            }
            Token::String(text) => {
                self.advance()?;
                operand.append(Node::Text(Text::new(text, parent)));
            }
            token => {
                self.current_token = token;
                return Err(self.unexpected("'@', '$', or a literal operand"));
            }
        }

        Ok(operand)
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Identifier(name) => {
                self.advance()?;
                Ok(name)
            }
            token => {
                self.current_token = token;
                Err(self.unexpected("identifier"))
            }
        }
    }

    fn expect_integer(&mut self) -> Result<i64, ParseError> {
        match self.current_token {
            Token::Integer(value) => {
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.unexpected("integer")),
        }
    }
}
