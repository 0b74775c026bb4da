use crate::ast::{NodeKind, Sequence};

/// Predicate over the current object: `[?(@.price < 10)]`.
///
/// Both operands are owned sub-trees and are never absent: an existence
/// test has the operator `"exists"` and an empty right sequence.
///
/// The operator is preserved verbatim as scanned; this layer has no
/// operator table and attaches no meaning to the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub left: Sequence,
    pub right: Sequence,
    pub operator: String,
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Filter {
    pub fn new(
        left: Sequence,
        right: Sequence,
        operator: impl Into<String>,
        parent: Option<NodeKind>,
    ) -> Self {
        Filter {
            left,
            right,
            operator: operator.into(),
            parent,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Filter
    }

    /// Renders as `Filter: <left> <operator> <right>`, recursively
    /// invoking each operand's own rendering.
    pub fn describe(&self) -> String {
        format!(
            "{}: {} {} {}",
            self.kind(),
            self.left.describe(),
            self.operator,
            self.right.describe()
        )
    }
}
