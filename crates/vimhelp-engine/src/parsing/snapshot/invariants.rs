use crate::parsing::{blocks::Node, grammar::Grammar};

/// Validates the shape of a built and cleaned tree.
///
/// Asserts that:
/// - The root is the grammar's root block
/// - No text sits directly under the root
/// - Every block below the root has at least one child
/// - Every child block is one its parent may contain, so leaf blocks
///   hold only text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(grammar: &Grammar, tree: &Node) {
    assert_eq!(
        tree.kind(),
        Some(grammar.root()),
        "tree root is not the `{}` root",
        grammar.name()
    );
    assert!(
        tree.children().iter().all(|child| !child.is_text()),
        "text left directly under the root"
    );
    check_block(grammar, tree, true);
}

fn check_block(grammar: &Grammar, node: &Node, is_root: bool) {
    let Node::Block { kind, children } = node else {
        return;
    };
    assert!(is_root || !children.is_empty(), "empty `{kind}` block survived cleaning");

    let def = grammar
        .get(*kind)
        .unwrap_or_else(|| panic!("`{kind}` is not defined by `{}`", grammar.name()));

    for child in children {
        let Some(child_kind) = child.kind() else {
            continue;
        };
        assert!(
            def.contained.contains(&child_kind),
            "`{kind}` may not contain `{child_kind}`"
        );
        check_block(grammar, child, false);
    }
}
