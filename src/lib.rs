pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{
    ArraySlice, Boolean, Field, Filter, Float, Identifier, Integer, Node, NodeKind, Parent,
    RecursiveDescent, Sequence, SliceParam, Text, Token, Union, Wildcard,
};
pub use lexer::{LexError, Lexer};
pub use output::{outline, OutlinePrinter};
pub use parser::{parse_template, ParseError, Parser};
