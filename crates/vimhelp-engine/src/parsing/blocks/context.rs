use super::types::BlockType;

/// What a block predicate can see about the line being scanned.
///
/// A fresh value is computed for every line and refreshed each time the
/// builder opens or closes a node. Neighbouring lines outside the document
/// read as empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context<'a> {
    pub line: &'a str,
    pub index: usize,
    pub previous_line: &'a str,
    pub next_line: &'a str,
    /// Consecutive blank lines ending at (and including) the current line.
    pub empty_lines: usize,
    /// Type of the innermost open node.
    pub current: BlockType,
    /// Type of the parent of the innermost open node, `None` at the root.
    pub parent: Option<BlockType>,
}

impl<'a> Context<'a> {
    pub fn at<S: AsRef<str>>(
        lines: &'a [S],
        index: usize,
        empty_lines: usize,
        current: BlockType,
        parent: Option<BlockType>,
    ) -> Self {
        let line_at = |i: Option<usize>| {
            i.and_then(|i| lines.get(i))
                .map(AsRef::as_ref)
                .unwrap_or_default()
        };

        Self {
            line: line_at(Some(index)),
            index,
            previous_line: line_at(index.checked_sub(1)),
            next_line: line_at(index.checked_add(1)),
            empty_lines,
            current,
            parent,
        }
    }

    /// The same line seen from a different open node.
    pub fn with_open(self, current: BlockType, parent: Option<BlockType>) -> Self {
        Self {
            current,
            parent,
            ..self
        }
    }

    pub fn parent_is(&self, kind: BlockType) -> bool {
        self.parent == Some(kind)
    }
}
