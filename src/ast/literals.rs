use crate::ast::NodeKind;

/// Literal run of raw template text.
///
/// Everything outside `{ ... }` blocks passes through as Text, and quoted
/// string literals inside filter operands are stored as Text as well.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Text {
    pub fn new(text: impl Into<String>, parent: Option<NodeKind>) -> Self {
        Text {
            text: text.into(),
            parent,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Text
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self.text)
    }
}

/// Integer literal, used both as filter operand and as array index.
#[derive(Debug, Clone, PartialEq)]
pub struct Integer {
    pub value: i64,
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Integer {
    pub fn new(value: i64, parent: Option<NodeKind>) -> Self {
        Integer { value, parent }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Integer
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self.value)
    }
}

/// Float literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Float {
    pub value: f64,
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Float {
    pub fn new(value: f64, parent: Option<NodeKind>) -> Self {
        Float { value, parent }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Float
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self.value)
    }
}

/// Boolean literal (`true` / `false`).
#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub value: bool,
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl Boolean {
    pub fn new(value: bool, parent: Option<NodeKind>) -> Self {
        Boolean { value, parent }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Boolean
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self.value)
    }
}
