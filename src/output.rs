//! Outline rendering for parsed templates.
//!
//! Each node renders one line via its own `describe()` string, with
//! children indented beneath their container. The node model keeps
//! container renderings flat (a sequence describes itself as just
//! `Sequence`), so walking the tree and indenting is the caller's job.
//! This module is that caller.
//!
//! Output is deterministic: the same tree always renders the same text,
//! and rendering never mutates the tree.
//!
//! # Examples
//!
//! ```
//! use docpath::output::outline;
//! use docpath::parser::parse_template;
//!
//! let root = parse_template("kind is {.kind}").unwrap();
//! assert_eq!(
//!     outline(&root),
//!     "Sequence\n  Text: kind is \n  Sequence\n    Field: kind"
//! );
//! ```

use crate::ast::{Node, Sequence};

pub struct OutlinePrinter {
    indent: usize,
}

impl OutlinePrinter {
    /// Printer with the default two-space indentation.
    pub fn new() -> Self {
        OutlinePrinter { indent: 2 }
    }

    /// Printer with a custom indentation width.
    pub fn with_indent(indent: usize) -> Self {
        OutlinePrinter { indent }
    }

    pub fn print(&self, root: &Sequence) -> String {
        let mut lines = Vec::new();
        self.print_sequence(root, 0, &mut lines);
        lines.join("\n")
    }

    fn print_sequence(&self, seq: &Sequence, depth: usize, lines: &mut Vec<String>) {
        lines.push(self.line(&seq.describe(), depth));
        for node in &seq.nodes {
            self.print_node(node, depth + 1, lines);
        }
    }

    fn print_node(&self, node: &Node, depth: usize, lines: &mut Vec<String>) {
        match node {
            Node::Sequence(seq) => self.print_sequence(seq, depth, lines),
            Node::Union(union) => {
                lines.push(self.line(&union.describe(), depth));
                for branch in &union.branches {
                    self.print_sequence(branch, depth + 1, lines);
                }
            }
            Node::Filter(filter) => {
                lines.push(self.line(&filter.describe(), depth));
                self.print_sequence(&filter.left, depth + 1, lines);
                self.print_sequence(&filter.right, depth + 1, lines);
            }
            other => lines.push(self.line(&other.describe(), depth)),
        }
    }

    fn line(&self, text: &str, depth: usize) -> String {
        format!("{}{}", " ".repeat(self.indent * depth), text)
    }
}

impl Default for OutlinePrinter {
    fn default() -> Self {
        OutlinePrinter::new()
    }
}

/// Renders a parsed template as an indented outline, one node per line.
///
/// # Examples
///
/// ```
/// use docpath::output::outline;
/// use docpath::parser::parse_template;
///
/// let root = parse_template("{.spec.containers[0].name}").unwrap();
/// let text = outline(&root);
/// assert!(text.contains("Field: containers"));
/// assert!(text.contains("Array: [0:1:1]"));
/// ```
pub fn outline(root: &Sequence) -> String {
    OutlinePrinter::new().print(root)
}
