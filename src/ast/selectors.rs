use crate::ast::NodeKind;

/// Selects an object member by exact name.
///
/// # Examples
///
/// ```text
/// {.metadata.name}
/// {['first-name']}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Field {
    pub fn new(name: impl Into<String>, parent: Option<NodeKind>) -> Self {
        Field {
            name: name.into(),
            parent,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Field
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self.name)
    }
}

/// Keyword-like bare word in expression position.
///
/// Distinct from [`Field`] at the grammar level: `{range .items[*]}` keeps
/// `range` as an Identifier while `.items` becomes a Field. The name is
/// stored as scanned; which words mean anything is a later layer's call.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Identifier {
    pub fn new(name: impl Into<String>, parent: Option<NodeKind>) -> Self {
        Identifier {
            name: name.into(),
            parent,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self.name)
    }
}

/// Marker for "all children" (`*`, `.*`, `[*]`). No payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Wildcard {
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Wildcard {
    pub fn new(parent: Option<NodeKind>) -> Self {
        Wildcard { parent }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Wildcard
    }

    pub fn describe(&self) -> String {
        self.kind().to_string()
    }
}

/// Marker for the recursive descent operator (`..`). No payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursiveDescent {
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl RecursiveDescent {
    pub fn new(parent: Option<NodeKind>) -> Self {
        RecursiveDescent { parent }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::RecursiveDescent
    }

    pub fn describe(&self) -> String {
        self.kind().to_string()
    }
}

/// Marker for stepping back to the enclosing context (`^`).
///
/// Used for relative paths inside filter operands. Carries only the
/// back-link, which is not meaningful to format, so `describe()` renders
/// the kind name alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Parent {
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Parent {
    pub fn new(parent: Option<NodeKind>) -> Self {
        Parent { parent }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Parent
    }

    pub fn describe(&self) -> String {
        self.kind().to_string()
    }
}
