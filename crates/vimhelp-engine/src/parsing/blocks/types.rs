use std::fmt;

use serde::Serialize;

/// The closed set of block types a grammar can define.
///
/// Every dialect uses a subset of these; the grammar decides which ones exist
/// and how they nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    /// The root of every tree. Starts unconditionally, never ends.
    Document,
    /// A chapter table of contents (`|01.1|<Tab>Title` lines).
    Toc,
    TocItem,
    OrderedList,
    UnorderedList,
    ListItem,
    /// A header line that follows a `=====` separator.
    SectionHeader,
    /// An upper-case header line.
    SubSectionHeader,
    Table,
    TableHeader,
    TableRow,
    /// A `Note:` aside.
    Note,
    /// The example lines after a line ending in ` >`.
    CommandBlock,
    /// Pre-formatted text (indented, or lines ending in ` ~`).
    FormattedText,
    /// The catch-all text block.
    Paragraph,
}

impl BlockType {
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Document => "document",
            BlockType::Toc => "toc",
            BlockType::TocItem => "tocItem",
            BlockType::OrderedList => "orderedList",
            BlockType::UnorderedList => "unorderedList",
            BlockType::ListItem => "listItem",
            BlockType::SectionHeader => "sectionHeader",
            BlockType::SubSectionHeader => "subSectionHeader",
            BlockType::Table => "table",
            BlockType::TableHeader => "tableHeader",
            BlockType::TableRow => "tableRow",
            BlockType::Note => "note",
            BlockType::CommandBlock => "commandBlock",
            BlockType::FormattedText => "formattedText",
            BlockType::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the block tree.
///
/// Text nodes carry one raw (unescaped) source line. Block nodes own their
/// children; the tree has no parent pointers once it leaves the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Block { kind: BlockType, children: Vec<Node> },
}

impl Node {
    pub fn text(line: impl Into<String>) -> Self {
        Node::Text(line.into())
    }

    pub fn block(kind: BlockType, children: Vec<Node>) -> Self {
        Node::Block { kind, children }
    }

    /// The block type, or `None` for a text node.
    pub fn kind(&self) -> Option<BlockType> {
        match self {
            Node::Text(_) => None,
            Node::Block { kind, .. } => Some(*kind),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Block { children, .. } => children,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
}
