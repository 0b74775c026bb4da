use std::fmt;

use crate::ast::NodeKind;

/// One slice parameter: start, end, or step.
///
/// `known` is false when the parameter was omitted in the source text
/// (`[:5]` has an unknown start). `derived` is true when the value was
/// computed by normalization rather than taken literally from source; a
/// parameter that is unknown and never derived means "select to the
/// natural boundary", not a literal zero, so consumers must gate on
/// `known` before reading `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceParam {
    pub value: i64,
    pub known: bool,
    pub derived: bool,
}

impl SliceParam {
    /// A parameter taken literally from source text.
    pub fn literal(value: i64) -> Self {
        SliceParam {
            value,
            known: true,
            derived: false,
        }
    }

    /// A parameter filled in by normalization, not written by the author.
    pub fn derived(value: i64) -> Self {
        SliceParam {
            value,
            known: true,
            derived: true,
        }
    }

    /// An omitted parameter. `value` is a placeholder and must not be read.
    pub fn unknown() -> Self {
        SliceParam::default()
    }
}

impl fmt::Display for SliceParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.known {
            write!(f, "{}", self.value)
        } else {
            f.write_str("?")
        }
    }
}

/// Index/range/step selection into an array.
///
/// The parameter triple is always ordered start, end, step and is filled
/// from exactly the tokens present in the source. Negative indices stay
/// literal here; resolving them against a concrete array length happens
/// downstream and is flagged via `derived`.
///
/// # Examples
///
/// ```text
/// {.items[2]}
/// {.items[1:3]}
/// {.items[::2]}
/// {.items[-1]}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySlice {
    /// start, end, step; in that order, always.
    pub params: [SliceParam; 3],
    /// Debug-only back-link, `None` for a root.
    pub parent: Option<NodeKind>,
}

impl ArraySlice {
    pub fn new(params: [SliceParam; 3], parent: Option<NodeKind>) -> Self {
        ArraySlice { params, parent }
    }

    pub fn start(&self) -> SliceParam {
        self.params[0]
    }

    pub fn end(&self) -> SliceParam {
        self.params[1]
    }

    pub fn step(&self) -> SliceParam {
        self.params[2]
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Array
    }

    pub fn describe(&self) -> String {
        format!(
            "{}: [{}:{}:{}]",
            self.kind(),
            self.start(),
            self.end(),
            self.step()
        )
    }
}
