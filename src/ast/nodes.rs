use std::fmt;

use crate::ast::{
    ArraySlice, Boolean, Field, Filter, Float, Identifier, Integer, NodeKind, Parent,
    RecursiveDescent, Sequence, Text, Union, Wildcard,
};

/// One element of a parsed path template.
///
/// The variant set is closed and mirrors [`NodeKind`] exactly; the kind is
/// the variant tag, not a stored field. Consumers dispatch with `match`
/// and destructure the variant they recognize to read its payload, so a
/// missed case is a compile error rather than a runtime surprise.
///
/// Trees are built once by the parser and read-only afterwards: the only
/// mutator in the model is [`Sequence::append`], which needs `&mut` access
/// the parser gives up when it returns the root.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Sequence(Sequence),
    Text(Text),
    Field(Field),
    Identifier(Identifier),
    ArraySlice(ArraySlice),
    Filter(Filter),
    Integer(Integer),
    Float(Float),
    Boolean(Boolean),
    Wildcard(Wildcard),
    RecursiveDescent(RecursiveDescent),
    Union(Union),
    Parent(Parent),
}

impl Node {
    /// The tag this node was constructed as.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Sequence(n) => n.kind(),
            Node::Text(n) => n.kind(),
            Node::Field(n) => n.kind(),
            Node::Identifier(n) => n.kind(),
            Node::ArraySlice(n) => n.kind(),
            Node::Filter(n) => n.kind(),
            Node::Integer(n) => n.kind(),
            Node::Float(n) => n.kind(),
            Node::Boolean(n) => n.kind(),
            Node::Wildcard(n) => n.kind(),
            Node::RecursiveDescent(n) => n.kind(),
            Node::Union(n) => n.kind(),
            Node::Parent(n) => n.kind(),
        }
    }

    /// Debug rendering of this node, `<KindName>: <payload>` for
    /// payload-bearing variants and the kind name alone for markers and
    /// containers. Pure: no side effects, same string every call.
    ///
    /// Not meant for round-trip parsing.
    pub fn describe(&self) -> String {
        match self {
            Node::Sequence(n) => n.describe(),
            Node::Text(n) => n.describe(),
            Node::Field(n) => n.describe(),
            Node::Identifier(n) => n.describe(),
            Node::ArraySlice(n) => n.describe(),
            Node::Filter(n) => n.describe(),
            Node::Integer(n) => n.describe(),
            Node::Float(n) => n.describe(),
            Node::Boolean(n) => n.describe(),
            Node::Wildcard(n) => n.describe(),
            Node::RecursiveDescent(n) => n.describe(),
            Node::Union(n) => n.describe(),
            Node::Parent(n) => n.describe(),
        }
    }

    /// The debug-only back-link: kind of the logical enclosing node,
    /// `None` for a root. Never traversed during evaluation.
    pub fn parent(&self) -> Option<NodeKind> {
        match self {
            Node::Sequence(n) => n.parent,
            Node::Text(n) => n.parent,
            Node::Field(n) => n.parent,
            Node::Identifier(n) => n.parent,
            Node::ArraySlice(n) => n.parent,
            Node::Filter(n) => n.parent,
            Node::Integer(n) => n.parent,
            Node::Float(n) => n.parent,
            Node::Boolean(n) => n.parent,
            Node::Wildcard(n) => n.parent,
            Node::RecursiveDescent(n) => n.parent,
            Node::Union(n) => n.parent,
            Node::Parent(n) => n.parent,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
