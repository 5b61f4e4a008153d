//! Grammar of the user manual pages.
//!
//! Predicates look at the raw lines; transforms and wrappers receive the
//! escaped text.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::{BlockType, Context};
use crate::parsing::html::wrap_html;
use crate::parsing::render::{RenderContext, RenderError};

use super::helpers::{
    is_empty, is_file_title, is_separator, remove_block_indentation, remove_code_markers,
    remove_tag_targets, split_first_cell, to_kebab_case,
};
use super::{BlockDef, Grammar, GrammarError, Wrapper};

pub(crate) const NOTE_START: &str = "\tNote:";

static HEADER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*(\d{2}\.\d{1,2})\*\s").expect("valid header number regex"));
static SPECIAL_MESSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[WE]\d{1,3}: ").expect("valid message regex"));
static START_OL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\t?\d{1,2}[.)] ").expect("valid ordered list regex"));
static START_UL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(- {1,2})\S").expect("valid unordered list regex"));
static START_TOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(\d{2}\.\d{1,2})\|\t").expect("valid toc regex"));
static SUB_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Z ,'!?-]+(?:\s+\*.+?\*)*$").expect("valid sub header regex")
});
static TABLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\t]+\t{1,2}[^\t]+$").expect("valid table line regex"));
static TABLE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\t[^\t]+\t+[^\t]+(?:\t~)?$").expect("valid table start regex")
});
static LIST_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<?(?:\t| {3})").expect("valid list continuation regex"));
static COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<?\t").expect("valid command line regex"));
static CLOSING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</[a-z]+>$").expect("valid closing tag regex"));
static UPPERCASE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:i|ms|mswin)\b").expect("valid uppercase word regex"));

pub(crate) fn starts_ordered(line: &str) -> bool {
    START_OL.is_match(line)
}

pub(crate) fn starts_unordered(line: &str) -> bool {
    START_UL.is_match(line)
}

fn strip_ordered(line: &str) -> &str {
    START_OL.find(line).map_or(line, |m| &line[m.end()..])
}

fn strip_unordered(line: &str) -> &str {
    match START_UL.captures(line).and_then(|caps| caps.get(1)) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}

pub(crate) fn always(_: &Context<'_>) -> bool {
    true
}

pub(crate) fn never(_: &Context<'_>) -> bool {
    false
}

pub(crate) fn join_all(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    Ok(lines.concat())
}

fn first(lines: &[String]) -> &str {
    lines.first().map_or("", String::as_str)
}

// Headers

pub(crate) fn section_header_start(cx: &Context<'_>) -> bool {
    is_separator(cx.previous_line)
}

fn section_header(lines: &[String], cx: &RenderContext<'_>) -> Result<String, RenderError> {
    let line = first(lines);
    let caps = HEADER_NUMBER
        .captures(line)
        .ok_or_else(|| cx.malformed_section_header(line))?;
    let number = caps[1].trim();

    let href = format!("#{number}");
    let anchor = wrap_html(number, "a", &[("href", &href), ("class", "header-anchor")]);
    let text = remove_tag_targets(&line[caps[0].len()..]);

    Ok(wrap_html(&format!("{anchor}{text}"), "h2", &[("id", number)]))
}

pub(crate) fn sub_header_start(cx: &Context<'_>) -> bool {
    SUB_HEADER.is_match(cx.line)
}

/// `GETTING STARTED ON MS-WINDOWS *tag*` becomes `Getting started on MS-windows`.
pub(crate) fn recapitalize(line: &str) -> String {
    let mut chars = line.chars();
    let Some(head) = chars.next() else {
        return String::new();
    };
    let text = format!("{head}{}", chars.as_str().to_lowercase());
    let text = UPPERCASE_WORD.replace(&text, |caps: &regex::Captures<'_>| caps[0].to_uppercase());
    remove_tag_targets(&text)
}

pub(crate) fn sub_header(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let line = first(lines);
    let id = to_kebab_case(line);
    let href = format!("#{id}");
    let anchor = wrap_html(
        "#",
        "a",
        &[("id", &id), ("href", &href), ("class", "header-anchor")],
    );
    Ok(wrap_html(&format!("{anchor}{line}"), "h3", &[("id", &id)]))
}

// Lists

fn ordered_list_start(cx: &Context<'_>) -> bool {
    starts_ordered(cx.line)
}

fn ordered_list_end(cx: &Context<'_>) -> bool {
    is_separator(cx.next_line)
        || cx.empty_lines >= 2
        || (cx.empty_lines == 1 && !starts_ordered(cx.next_line))
}

fn unordered_list_start(cx: &Context<'_>) -> bool {
    starts_unordered(cx.line)
}

fn unordered_list_end(cx: &Context<'_>) -> bool {
    is_separator(cx.next_line)
        || cx.empty_lines >= 2
        || (cx.empty_lines == 1 && !starts_unordered(cx.next_line))
}

fn list_item_start(cx: &Context<'_>) -> bool {
    starts_ordered(cx.line) || starts_unordered(cx.line)
}

fn list_item_end(cx: &Context<'_>) -> bool {
    let next = cx.next_line;
    cx.empty_lines >= 2
        || (is_empty(cx.line)
            && !LIST_CONTINUATION.is_match(next)
            && !starts_ordered(next)
            && !starts_unordered(next))
        || is_separator(next)
        || starts_ordered(next)
        || starts_unordered(next)
}

fn list_item(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let contents = wrap_html(&lines.join(" "), "div", &[("class", "li-contents")]);
    Ok(wrap_html(&contents, "li", &[]))
}

// Table of contents

fn toc_start(cx: &Context<'_>) -> bool {
    START_TOC.is_match(cx.line)
}

fn toc_end(cx: &Context<'_>) -> bool {
    is_empty(cx.line)
}

fn toc_heading(lines: Vec<String>) -> Vec<String> {
    let heading = wrap_html(&wrap_html("Table of contents", "strong", &[]), "p", &[]);
    std::iter::once(heading).chain(lines).collect()
}

fn toc_item_line(line: &str) -> String {
    match START_TOC.captures(line) {
        Some(caps) => {
            let href = format!("#{}", &caps[1]);
            wrap_html(&line[caps[0].len()..], "a", &[("href", &href)])
        }
        None => line.to_string(),
    }
}

// Text blocks

fn note_start(cx: &Context<'_>) -> bool {
    cx.line == NOTE_START
}

fn note_end(cx: &Context<'_>) -> bool {
    is_empty(cx.line) && !cx.next_line.starts_with('\t')
}

fn skip_first(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().skip(1).collect()
}

pub(crate) fn paragraph_start(cx: &Context<'_>) -> bool {
    if is_empty(cx.line) || is_separator(cx.line) {
        return false;
    }

    match cx.current {
        BlockType::Note => cx.line != NOTE_START,
        BlockType::ListItem => true,
        _ => !cx.line.starts_with('\t'),
    }
}

pub(crate) fn paragraph_end(cx: &Context<'_>) -> bool {
    let (line, next) = (cx.line, cx.next_line);
    if is_empty(next) || line.ends_with(" >") || line == ">" {
        return true;
    }

    match cx.parent {
        Some(BlockType::Note) => next.starts_with("\t\t"),
        Some(BlockType::ListItem) => {
            (next.starts_with('\t')
                && !starts_unordered(line)
                && !COMMAND_LINE.is_match(line)
                && line != "<")
                || next.starts_with("      ")
                || starts_ordered(next)
                || starts_unordered(next)
        }
        _ => line == "<" || next.starts_with(char::is_whitespace),
    }
}

pub(crate) fn paragraph_line(line: &str) -> String {
    let line = remove_code_markers(line);
    strip_unordered(strip_ordered(&line)).to_string()
}

pub(crate) fn command_block_start(cx: &Context<'_>) -> bool {
    (cx.previous_line.ends_with(" >") || cx.previous_line == ">")
        && (cx.line.starts_with('\t') || cx.next_line.starts_with('\t'))
}

pub(crate) fn command_block_end(cx: &Context<'_>) -> bool {
    is_empty(cx.next_line) || cx.next_line == "<" || !COMMAND_LINE.is_match(cx.next_line)
}

pub(crate) fn command_line(line: &str) -> String {
    match line.strip_prefix("&lt;") {
        Some(rest) if rest.starts_with('\t') => rest.to_string(),
        _ => line.to_string(),
    }
}

pub(crate) fn command_block(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let code = wrap_html(&lines.join("\n"), "code", &[]);
    Ok(wrap_html(&code, "pre", &[("class", "command-block")]))
}

pub(crate) fn formatted_text_start(cx: &Context<'_>) -> bool {
    if cx.line.ends_with('~') {
        return true;
    }

    match cx.current {
        BlockType::ListItem => cx.line.starts_with('\t') && !starts_ordered(cx.line),
        BlockType::Note => cx.line.starts_with("\t\t"),
        _ => cx.line.starts_with('\t'),
    }
}

pub(crate) fn formatted_text_end(cx: &Context<'_>) -> bool {
    let next = cx.next_line;
    let indent = if cx.parent_is(BlockType::Note) { "\t\t" } else { "\t" };

    (!is_empty(next)
        && !next.starts_with(indent)
        && !next.starts_with("    ")
        && !next.ends_with(" ~"))
        || (cx.parent_is(BlockType::ListItem) && is_empty(next))
        || next == NOTE_START
}

pub(crate) fn formatted_line(line: &str) -> String {
    line.strip_suffix(" ~").unwrap_or(line).to_string()
}

pub(crate) fn formatted_text(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let text = lines.join("\n");
    let attrs: &[(&str, &str)] = if !SPECIAL_MESSAGE.is_match(&text) {
        &[]
    } else if text.starts_with('E') {
        &[("class", "message-error")]
    } else {
        &[("class", "message-warning")]
    };

    Ok(wrap_html(&text, "pre", attrs))
}

// Tables

pub(crate) fn table_start(cx: &Context<'_>) -> bool {
    if is_file_title(cx.line) {
        return false;
    }
    TABLE_LINE.is_match(cx.line)
        || (TABLE_START.is_match(cx.line)
            && (TABLE_START.is_match(cx.next_line) || cx.next_line.starts_with("\t\t")))
}

pub(crate) fn table_end(cx: &Context<'_>) -> bool {
    is_empty(cx.next_line)
}

pub(crate) fn table_header_start(cx: &Context<'_>) -> bool {
    cx.line.ends_with("\t~")
}

pub(crate) fn table_header_line(line: &str) -> String {
    line.strip_suffix('~').unwrap_or(line).trim().to_string()
}

pub(crate) fn table_header(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let (head, rest) = lines.split_first().map_or(("", &[][..]), |(h, r)| (h.as_str(), r));
    let cells = wrap_html(head, "th", &[]) + &wrap_html(&rest.join(" "), "th", &[]);
    Ok(wrap_html(&cells, "tr", &[]))
}

pub(crate) fn table_row_end(cx: &Context<'_>) -> bool {
    !cx.next_line.starts_with("\t\t")
}

pub(crate) fn trim_line(line: &str) -> String {
    line.trim().to_string()
}

/// The first cell is code unless it is already markup, or reads as prose
/// (has a space and does not start with `:`).
pub(crate) fn table_row(lines: &[String], _: &RenderContext<'_>) -> Result<String, RenderError> {
    let (head, rest) = lines.split_first().map_or(("", &[][..]), |(h, r)| (h.as_str(), r));
    let is_code = !CLOSING_TAG.is_match(head) && (!head.contains(' ') || head.starts_with(':'));
    let first_cell = if is_code {
        wrap_html(head, "code", &[])
    } else {
        head.to_string()
    };

    let cells = wrap_html(&first_cell, "td", &[]) + &wrap_html(&rest.join(" "), "td", &[]);
    Ok(wrap_html(&cells, "tr", &[]))
}

/// Definitions shared by the user manual and the other help files.
pub(crate) fn text_blocks() -> Vec<(BlockType, BlockDef)> {
    use BlockType::*;

    vec![
        (
            OrderedList,
            BlockDef::new(ordered_list_start, ordered_list_end, Wrapper::Tag("ol"))
                .contains(&[ListItem]),
        ),
        (
            UnorderedList,
            BlockDef::new(unordered_list_start, unordered_list_end, Wrapper::Tag("ul"))
                .contains(&[ListItem]),
        ),
        (
            ListItem,
            BlockDef::new(list_item_start, list_item_end, Wrapper::With(list_item))
                .contains(&[CommandBlock, FormattedText, Paragraph]),
        ),
        (
            SubSectionHeader,
            BlockDef::new(sub_header_start, always, Wrapper::With(sub_header))
                .lines(recapitalize)
                .raw(),
        ),
        (
            Table,
            BlockDef::new(table_start, table_end, Wrapper::Tag("table"))
                .contains(&[TableHeader, TableRow]),
        ),
        (
            TableHeader,
            BlockDef::new(table_header_start, always, Wrapper::With(table_header))
                .lines(table_header_line)
                .block(split_first_cell)
                .raw(),
        ),
        (
            TableRow,
            BlockDef::new(always, table_row_end, Wrapper::With(table_row))
                .lines(trim_line)
                .block(split_first_cell),
        ),
        (
            Note,
            BlockDef::new(note_start, note_end, Wrapper::TagWith("div", &[("class", "note")]))
                .contains(&[CommandBlock, FormattedText, Paragraph])
                .block(skip_first),
        ),
        (
            Paragraph,
            BlockDef::new(paragraph_start, paragraph_end, Wrapper::Tag("p")).lines(paragraph_line),
        ),
        (
            CommandBlock,
            BlockDef::new(command_block_start, command_block_end, Wrapper::With(command_block))
                .lines(command_line)
                .block(remove_block_indentation)
                .raw(),
        ),
        (
            FormattedText,
            BlockDef::new(formatted_text_start, formatted_text_end, Wrapper::With(formatted_text))
                .lines(formatted_line)
                .block(remove_block_indentation)
                .raw(),
        ),
    ]
}

pub fn grammar() -> Result<Grammar, GrammarError> {
    use BlockType::*;

    let mut blocks = text_blocks();
    blocks.extend([
        (
            Document,
            BlockDef::new(always, never, Wrapper::With(join_all)).contains(&[
                Toc,
                OrderedList,
                UnorderedList,
                SectionHeader,
                SubSectionHeader,
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
        (
            Toc,
            BlockDef::new(
                toc_start,
                toc_end,
                Wrapper::TagWith("ol", &[("class", "table-of-contents")]),
            )
            .contains(&[TocItem])
            .block(toc_heading),
        ),
        (
            TocItem,
            BlockDef::new(toc_start, always, Wrapper::Tag("li")).lines(toc_item_line),
        ),
    ]);

    Grammar::new("usr", Document, blocks)
}
