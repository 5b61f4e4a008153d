//! Grammar of the reference help files (`options.txt`, `editing.txt`, ...).
//!
//! Same blocks as the user manual, minus the chapter table of contents.
//! Section headers are not numbered here: they take the first tag they
//! define as their anchor, and win over list items after a separator.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::BlockType;
use crate::parsing::html::{encode_uri_component, wrap_html};
use crate::parsing::render::{RenderContext, RenderError};

use super::helpers::remove_tag_targets;
use super::usr::{always, join_all, never, section_header_start, text_blocks};
use super::{BlockDef, Grammar, GrammarError, Wrapper};

static TAG_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s]+)\*").expect("valid tag target regex"));

fn section_header(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let line = lines.first().map_or("", String::as_str);
    let text = remove_tag_targets(line);

    Ok(match TAG_TARGET.captures(line) {
        Some(caps) => {
            let id = &caps[1];
            let href = format!("#{}", encode_uri_component(id));
            let anchor = wrap_html("#", "a", &[("href", &href), ("class", "header-anchor")]);
            wrap_html(&format!("{anchor}{text}"), "h2", &[("id", id)])
        }
        None => wrap_html(&text, "h2", &[]),
    })
}

pub fn grammar() -> Result<Grammar, GrammarError> {
    use BlockType::*;

    let mut blocks = text_blocks();
    blocks.extend([
        (
            Document,
            BlockDef::new(always, never, Wrapper::With(join_all)).contains(&[
                SectionHeader,
                SubSectionHeader,
                OrderedList,
                UnorderedList,
                Table,
                Note,
                CommandBlock,
                FormattedText,
                Paragraph,
            ]),
        ),
        (
            SectionHeader,
            BlockDef::new(section_header_start, always, Wrapper::With(section_header)).raw(),
        ),
    ]);

    Grammar::new("help", Document, blocks)
}
