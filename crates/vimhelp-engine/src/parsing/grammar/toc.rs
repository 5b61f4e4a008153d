//! Grammar of the sidebar: the user manual table of contents as a stack of
//! collapsible chapters, rendered once for every page.

use crate::parsing::blocks::BlockType;
use crate::parsing::html::wrap_html;
use crate::parsing::render::{RenderContext, RenderError};

use super::helpers::to_kebab_case;
use super::usr_toc::{self, chapter_line};
use super::{Grammar, GrammarError, Wrapper};

/// Opens a `<details>` block that the following section list closes. The
/// page being rendered gets its chapter title without a link.
fn chapter_summary(lines: &[String], cx: &RenderContext<'_>) -> Result<String, RenderError> {
    let chapter = chapter_line(lines, cx)?;
    let is_current = cx
        .xref
        .title(cx.document)
        .is_some_and(|title| to_kebab_case(title) == to_kebab_case(chapter.title));
    let link = if is_current {
        chapter.title.to_string()
    } else {
        chapter.link()
    };

    let start = chapter.number.parse::<u32>().unwrap_or_default().to_string();
    let summary = wrap_html(
        &wrap_html(&wrap_html(&link, "li", &[]), "ol", &[("start", &start)]),
        "summary",
        &[],
    );
    Ok(format!(r#"<details id="{}">{summary}"#, chapter.slug()))
}

fn section_list(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let list = wrap_html(&lines.join(" "), "ol", &[("class", "table-of-contents")]);
    Ok(format!("{list}</details>"))
}

fn erase(_: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    Ok(String::new())
}

pub fn grammar() -> Result<Grammar, GrammarError> {
    let grammar = Grammar::new("toc", BlockType::Document, usr_toc::blocks())?;

    Ok(grammar
        .map_block(BlockType::SectionHeader, |def| def.wrapper = Wrapper::Tag("p"))
        .map_block(BlockType::SubSectionHeader, |def| {
            def.wrapper = Wrapper::With(chapter_summary)
        })
        .map_block(BlockType::Toc, |def| def.wrapper = Wrapper::With(section_list))
        .map_block(BlockType::Paragraph, |def| def.wrapper = Wrapper::With(erase)))
}
