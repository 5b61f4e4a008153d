use std::fmt::Write;

use crate::parsing::blocks::Node;

/// An indented outline of `node`: block types by name, text lines quoted
/// with their tabs visible.
///
/// ```text
/// document
///   orderedList
///     listItem
///       paragraph
///         "1) lorem ipsum"
/// ```
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(line) => {
            let _ = writeln!(out, "{indent}{line:?}");
        }
        Node::Block { kind, children } => {
            let _ = writeln!(out, "{indent}{kind}");
            for child in children {
                write_node(out, child, depth + 1);
            }
        }
    }
}
