use crate::parsing::grammar::Grammar;

use super::{
    clean::{CleanReport, clean_with_report},
    context::Context,
    types::{BlockType, Node},
};

#[derive(Debug, Clone)]
enum Entry {
    Text(String),
    Block(usize),
}

#[derive(Debug, Clone)]
struct Slot {
    kind: BlockType,
    parent: Option<usize>,
    children: Vec<Entry>,
}

/// Single-pass tree builder driven by a [`Grammar`].
///
/// Nodes live in an arena while the scan runs; a node's parent is an index
/// into it. [`TreeBuilder::finish`] turns the arena into an owned [`Node`].
pub struct TreeBuilder<'g> {
    grammar: &'g Grammar,
    slots: Vec<Slot>,
    current: usize,
    empty_lines: usize,
}

impl<'g> TreeBuilder<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            slots: vec![Slot {
                kind: grammar.root(),
                parent: None,
                children: Vec::new(),
            }],
            current: 0,
            empty_lines: 0,
        }
    }

    /// Feed the line at `index`. Predicates see its neighbours in `lines`.
    pub fn push<S: AsRef<str>>(&mut self, lines: &[S], index: usize) {
        let line = lines.get(index).map(AsRef::as_ref).unwrap_or_default();
        self.empty_lines = if line.is_empty() { self.empty_lines + 1 } else { 0 };

        let mut cx = Context::at(lines, index, self.empty_lines, self.current_kind(), self.parent_kind());

        while let Some(kind) = self.opening_child(&cx) {
            self.open(kind);
            cx = cx.with_open(self.current_kind(), self.parent_kind());
        }

        if !line.is_empty() {
            self.slots[self.current].children.push(Entry::Text(line.to_string()));
        }

        while (self.grammar.block(self.current_kind()).end)(&cx) {
            let Some(parent) = self.slots[self.current].parent else {
                break;
            };
            self.current = parent;
            cx = cx.with_open(self.current_kind(), self.parent_kind());
        }
    }

    /// Kinds of the open nodes, from the root down to the current one.
    pub fn open_path(&self) -> Vec<BlockType> {
        let mut path = Vec::new();
        let mut at = Some(self.current);
        while let Some(i) = at {
            path.push(self.slots[i].kind);
            at = self.slots[i].parent;
        }
        path.reverse();
        path
    }

    /// Close everything still open and return the raw, uncleaned tree.
    pub fn finish(self) -> Node {
        let mut slots: Vec<Option<Slot>> = self.slots.into_iter().map(Some).collect();
        take_node(&mut slots, 0)
    }

    fn current_kind(&self) -> BlockType {
        self.slots[self.current].kind
    }

    fn parent_kind(&self) -> Option<BlockType> {
        self.slots[self.current].parent.map(|p| self.slots[p].kind)
    }

    fn opening_child(&self, cx: &Context<'_>) -> Option<BlockType> {
        self.grammar
            .block(self.current_kind())
            .contained
            .iter()
            .copied()
            .find(|&kind| (self.grammar.block(kind).start)(cx))
    }

    fn open(&mut self, kind: BlockType) {
        let id = self.slots.len();
        self.slots.push(Slot {
            kind,
            parent: Some(self.current),
            children: Vec::new(),
        });
        self.slots[self.current].children.push(Entry::Block(id));
        self.current = id;
    }
}

fn take_node(slots: &mut [Option<Slot>], id: usize) -> Node {
    let Some(slot) = slots[id].take() else {
        return Node::block(BlockType::Document, Vec::new());
    };
    let children = slot
        .children
        .into_iter()
        .map(|entry| match entry {
            Entry::Text(line) => Node::Text(line),
            Entry::Block(child) => take_node(slots, child),
        })
        .collect();
    Node::block(slot.kind, children)
}

/// Build the tree for `lines` and clean it.
pub fn build<S: AsRef<str>>(grammar: &Grammar, lines: &[S]) -> Node {
    build_with_report(grammar, lines).0
}

/// Like [`build`], also returning the lines no block claimed.
pub fn build_with_report<S: AsRef<str>>(grammar: &Grammar, lines: &[S]) -> (Node, CleanReport) {
    let mut builder = TreeBuilder::new(grammar);
    for index in 0..lines.len() {
        builder.push(lines, index);
    }
    clean_with_report(builder.finish())
}
