use std::fmt;

/// Tag identifying which variant a tree node is.
///
/// The set is closed: the parser constructs nothing outside it, and every
/// consumer dispatches over it with an exhaustive `match`, so adding a
/// member is a compile-visible change at every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Literal run of template text
    Text,

    /// Array index/range/step selection
    Array,

    /// Ordered run of sibling nodes
    Sequence,

    /// Object member selection by name
    Field,

    /// Step back to the enclosing context
    Parent,

    /// Keyword-like bare word (`range`, `end`)
    Identifier,

    /// Predicate over the current object
    Filter,

    /// Integer literal
    Integer,

    /// Float literal
    Float,

    /// All children (`*`)
    Wildcard,

    /// Recursive descent (`..`)
    RecursiveDescent,

    /// Comma-separated alternative branches
    Union,

    /// Boolean literal
    Boolean,
}

impl NodeKind {
    /// The kind's display name, also used as the `describe()` prefix.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Text => "Text",
            NodeKind::Array => "Array",
            NodeKind::Sequence => "Sequence",
            NodeKind::Field => "Field",
            NodeKind::Parent => "Parent",
            NodeKind::Identifier => "Identifier",
            NodeKind::Filter => "Filter",
            NodeKind::Integer => "Integer",
            NodeKind::Float => "Float",
            NodeKind::Wildcard => "Wildcard",
            NodeKind::RecursiveDescent => "RecursiveDescent",
            NodeKind::Union => "Union",
            NodeKind::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
