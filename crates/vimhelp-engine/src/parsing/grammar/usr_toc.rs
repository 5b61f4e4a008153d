//! Grammar of `usr_toc.txt`, the table of contents of the user manual.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::{BlockType, Context};
use crate::parsing::html::wrap_html;
use crate::parsing::render::{RenderContext, RenderError};

use super::helpers::{is_empty, is_separator, to_kebab_case};
use super::usr::{always, join_all, never, section_header_start};
use super::{BlockDef, Grammar, GrammarError, Wrapper};

static CHAPTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|usr_(\d{2}).txt\|").expect("valid chapter regex"));
static TOC_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\t{2}\|(\d{2}\.\d{1,2})\|\t").expect("valid toc item regex"));

/// A chapter line: `|usr_02.txt|  The first steps in Vim`.
pub(crate) struct Chapter<'a> {
    pub number: &'a str,
    pub title: &'a str,
}

impl<'a> Chapter<'a> {
    pub(crate) fn parse(line: &'a str) -> Option<Self> {
        let number = CHAPTER.captures(line)?.get(1)?.as_str();
        let title = line.split("  ").nth(1)?;
        Some(Self { number, title })
    }

    pub(crate) fn slug(&self) -> String {
        format!("{}-{}", self.number, to_kebab_case(self.title))
    }

    pub(crate) fn link(&self) -> String {
        let href = format!("/{}", self.slug());
        wrap_html(self.title, "a", &[("href", &href)])
    }
}

pub(crate) fn chapter_start(cx: &Context<'_>) -> bool {
    CHAPTER.is_match(cx.line)
}

pub(crate) fn toc_start(cx: &Context<'_>) -> bool {
    cx.line.starts_with("\t\t")
}

pub(crate) fn toc_end(cx: &Context<'_>) -> bool {
    is_empty(cx.next_line)
}

fn paragraph_start(cx: &Context<'_>) -> bool {
    !is_empty(cx.line) && !is_separator(cx.line)
}

fn header_line(line: &str) -> String {
    line.replacen(" ~", "", 1)
}

pub(crate) fn chapter_line<'a>(
    lines: &'a [String],
    cx: &RenderContext<'_>,
) -> Result<Chapter<'a>, RenderError> {
    let line = lines.first().map_or("", String::as_str);
    Chapter::parse(line).ok_or_else(|| cx.malformed_chapter_header(line))
}

fn chapter_header(lines: &[String], cx: &RenderContext<'_>) -> Result<String, RenderError> {
    let chapter = chapter_line(lines, cx)?;
    Ok(wrap_html(&format!("{}. {}", chapter.number, chapter.link()), "h3", &[]))
}

/// Manual sections without an owner in the tag index stay unlinked.
fn toc_item(lines: &[String], cx: &RenderContext<'_>) -> Result<String, RenderError> {
    let line = lines.first().map_or("", String::as_str);
    let entry = TOC_ITEM.captures(line).and_then(|caps| {
        let link = cx.xref.link_to_tag("usr_toc", &caps[1])?;
        Some(wrap_html(&line[caps[0].len()..], "a", &[("href", &link)]))
    });

    Ok(match entry {
        Some(entry) => wrap_html(&entry, "li", &[]),
        None => {
            log::debug!("{}: unlinked table of contents entry `{line}`", cx.document);
            wrap_html(TOC_ITEM.replace(line, "").trim(), "li", &[])
        }
    })
}

/// Definitions of the table of contents page, also the base of the sidebar.
pub(crate) fn blocks() -> Vec<(BlockType, BlockDef)> {
    use BlockType::*;

    vec![
        (
            Document,
            BlockDef::new(always, never, Wrapper::With(join_all)).contains(&[
                Toc,
                SectionHeader,
                SubSectionHeader,
                Paragraph,
            ]),
        ),
        (
            SectionHeader,
            BlockDef::new(section_header_start, always, Wrapper::Tag("h2"))
                .lines(header_line)
                .raw(),
        ),
        (
            SubSectionHeader,
            BlockDef::new(chapter_start, always, Wrapper::With(chapter_header)).raw(),
        ),
        (
            Toc,
            BlockDef::new(
                toc_start,
                toc_end,
                Wrapper::TagWith("ol", &[("class", "table-of-contents")]),
            )
            .contains(&[TocItem]),
        ),
        (
            TocItem,
            BlockDef::new(always, always, Wrapper::With(toc_item)).raw(),
        ),
        (
            Paragraph,
            BlockDef::new(paragraph_start, always, Wrapper::Tag("p")).raw(),
        ),
    ]
}

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::new("usr_toc", BlockType::Document, blocks())
}
