use super::types::Node;

/// What cleaning threw away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Text lines that sat directly under the root, in document order.
    pub dropped_lines: Vec<String>,
}

/// Remove empty blocks recursively, then the text lines left directly under
/// the root. The root itself is kept even when it ends up empty.
pub fn clean(node: Node) -> Node {
    clean_with_report(node).0
}

pub fn clean_with_report(node: Node) -> (Node, CleanReport) {
    let mut report = CleanReport::default();
    let Node::Block { kind, children } = node else {
        return (node, report);
    };

    let children = children
        .into_iter()
        .filter_map(remove_empty)
        .filter_map(|child| match child {
            Node::Text(line) => {
                report.dropped_lines.push(line);
                None
            }
            block => Some(block),
        })
        .collect();

    if !report.dropped_lines.is_empty() {
        log::debug!(
            "dropped {} line(s) outside of any {kind} block",
            report.dropped_lines.len()
        );
    }

    (Node::Block { kind, children }, report)
}

fn remove_empty(node: Node) -> Option<Node> {
    match node {
        Node::Text(_) => Some(node),
        Node::Block { kind, children } => {
            let children: Vec<_> = children.into_iter().filter_map(remove_empty).collect();
            (!children.is_empty()).then_some(Node::Block { kind, children })
        }
    }
}
