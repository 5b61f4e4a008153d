use thiserror::Error;

use crate::xref::CrossReference;

use super::blocks::{BlockType, Node};
use super::grammar::{BlockDef, Grammar, Wrapper};
use super::html::{escape_html, wrap_html};
use super::inline::InlineFormatter;

/// What a wrapper function may consult besides the strings it wraps.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Identifier of the document being rendered (`usr_02`, `options`, ...).
    pub document: &'a str,
    pub xref: &'a CrossReference,
}

impl RenderContext<'_> {
    pub fn malformed_section_header(&self, line: &str) -> RenderError {
        RenderError::MalformedSectionHeader {
            document: self.document.to_string(),
            line: line.to_string(),
        }
    }

    pub fn malformed_chapter_header(&self, line: &str) -> RenderError {
        RenderError::MalformedChapterHeader {
            document: self.document.to_string(),
            line: line.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{document}: section header without a `*NN.N*` number: `{line}`")]
    MalformedSectionHeader { document: String, line: String },

    #[error("{document}: chapter header without a `|usr_NN.txt|` link: `{line}`")]
    MalformedChapterHeader { document: String, line: String },

    #[error("grammar `{grammar}` has no definition for block `{kind}`")]
    UnknownBlock {
        grammar: &'static str,
        kind: BlockType,
    },
}

/// Walks a cleaned tree and produces its markup.
pub struct Renderer<'a> {
    grammar: &'a Grammar,
    cx: RenderContext<'a>,
    inline: InlineFormatter<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(document: &'a str, grammar: &'a Grammar, xref: &'a CrossReference) -> Self {
        Self {
            grammar,
            cx: RenderContext { document, xref },
            inline: InlineFormatter::new(document, xref),
        }
    }

    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        self.render_node(node, None)
    }

    fn render_node(&self, node: &Node, parent: Option<&BlockDef>) -> Result<String, RenderError> {
        let (kind, children) = match node {
            // Text carries no type: the enclosing block decides how lines look.
            Node::Text(line) => {
                let text = escape_html(line);
                return Ok(match parent.and_then(|def| def.transform_lines) {
                    Some(transform) => transform(&text),
                    None => text,
                });
            }
            Node::Block { kind, children } => (*kind, children),
        };

        let def = self.grammar.get(kind).ok_or(RenderError::UnknownBlock {
            grammar: self.grammar.name(),
            kind,
        })?;

        let mut lines = children
            .iter()
            .map(|child| self.render_node(child, Some(def)))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(transform) = def.transform_block {
            lines = transform(lines);
        }

        if def.is_leaf() && def.inline_parsing {
            lines = lines.iter().map(|line| self.inline.format(line)).collect();
        }

        if lines.iter().all(|line| line.trim().is_empty()) {
            return Ok(String::new());
        }

        match def.wrapper {
            Wrapper::Tag(tag) => Ok(wrap_html(&lines.join(" "), tag, &[])),
            Wrapper::TagWith(tag, attrs) => Ok(wrap_html(&lines.join(" "), tag, attrs)),
            Wrapper::With(wrap) => wrap(&lines, &self.cx),
        }
    }
}

/// Render `node` as it appears in `document`.
pub fn render(
    document: &str,
    grammar: &Grammar,
    node: &Node,
    xref: &CrossReference,
) -> Result<String, RenderError> {
    Renderer::new(document, grammar, xref).render(node)
}
