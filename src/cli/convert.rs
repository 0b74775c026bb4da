//! Tree -> JSON conversion for tooling output

use serde_json::{json, Value};

use crate::ast::{Node, Sequence, SliceParam};

/// Convert a parsed template into a JSON rendering of its tree
pub fn tree_to_json(root: &Sequence) -> Value {
    sequence_to_json(root)
}

/// Convert a single node (and everything beneath it) to JSON
pub fn node_to_json(node: &Node) -> Value {
    let kind = node.kind().name();
    match node {
        Node::Sequence(seq) => sequence_to_json(seq),
        Node::Text(t) => json!({ "kind": kind, "text": t.text }),
        Node::Field(f) => json!({ "kind": kind, "name": f.name }),
        Node::Identifier(i) => json!({ "kind": kind, "name": i.name }),
        Node::ArraySlice(a) => json!({
            "kind": kind,
            "start": param_to_json(&a.start()),
            "end": param_to_json(&a.end()),
            "step": param_to_json(&a.step()),
        }),
        Node::Filter(f) => json!({
            "kind": kind,
            "left": sequence_to_json(&f.left),
            "operator": f.operator,
            "right": sequence_to_json(&f.right),
        }),
        Node::Integer(n) => json!({ "kind": kind, "value": n.value }),
        Node::Float(n) => json!({ "kind": kind, "value": n.value }),
        Node::Boolean(b) => json!({ "kind": kind, "value": b.value }),
        Node::Union(u) => json!({
            "kind": kind,
            "branches": u.branches.iter().map(sequence_to_json).collect::<Vec<_>>(),
        }),
        Node::Wildcard(_) | Node::RecursiveDescent(_) | Node::Parent(_) => {
            json!({ "kind": kind })
        }
    }
}

fn sequence_to_json(seq: &Sequence) -> Value {
    json!({
        "kind": seq.kind().name(),
        "nodes": seq.nodes.iter().map(node_to_json).collect::<Vec<_>>(),
    })
}

fn param_to_json(param: &SliceParam) -> Value {
    json!({ "value": param.value, "known": param.known, "derived": param.derived })
}
