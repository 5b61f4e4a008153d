pub mod blocks;
pub mod grammar;
pub mod html;
pub mod inline;
pub mod render;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::xref::CrossReference;

use blocks::{CleanReport, Node, build_with_report};
use grammar::Grammar;
use render::RenderError;

#[derive(Debug)]
pub struct ParsedDoc {
    pub tree: Node,
    /// Lines that no block of the grammar claimed.
    pub unclaimed: CleanReport,
}

pub fn parse_document<S: AsRef<str>>(grammar: &Grammar, lines: &[S]) -> ParsedDoc {
    let (tree, unclaimed) = build_with_report(grammar, lines);
    ParsedDoc { tree, unclaimed }
}

/// Parse `lines` with `grammar` and render them as the HTML of `document`.
pub fn render_document<S: AsRef<str>>(
    document: &str,
    grammar: &Grammar,
    lines: &[S],
    xref: &CrossReference,
) -> Result<String, RenderError> {
    let doc = parse_document(grammar, lines);
    if !doc.unclaimed.dropped_lines.is_empty() {
        log::debug!(
            "{document}: {} line(s) not matched by the `{}` grammar",
            doc.unclaimed.dropped_lines.len(),
            grammar.name()
        );
    }
    render::render(document, grammar, &doc.tree, xref)
}
