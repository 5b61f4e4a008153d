use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::html::{escape_html, wrap_html};
use crate::xref::CrossReference;

use super::scan::{anywhere, at_start_or_after_space, replace_bounded};

static TAG_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|([^ \t|]+)\|").expect("valid tag reference regex"));
static OPTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([a-z]+)'").expect("valid option name regex"));
static SECTION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{1,2}$").expect("valid section number regex"));

/// Resolve `|tag|` references, then bare `'option'` names.
pub(crate) fn create_tags(document: &str, xref: &CrossReference, text: &str) -> String {
    let text = TAG_REFERENCE.replace_all(text, |caps: &Captures<'_>| {
        resolve_tag(document, xref, &caps[1])
    });

    replace_bounded(&text, &OPTION_NAME, at_start_or_after_space, anywhere, |caps| {
        let option = &caps[0];
        match xref.link_to_tag(document, option) {
            Some(href) => wrap_html(&caps[1], "a", &[("href", &href), ("class", "tag option")]),
            None => wrap_html(option, "code", &[]),
        }
    })
}

fn resolve_tag(document: &str, xref: &CrossReference, tag: &str) -> String {
    if xref.owner(tag).is_none() {
        return tag.to_string();
    }

    // A whole page: quote its title.
    if let Some(page) = tag.strip_suffix(".txt")
        && let Some(title) = xref.title(page)
        && let Some(href) = xref.link_to_tag(document, tag)
    {
        return quoted_link(&escape_html(title), &href);
    }

    // A numbered section of the user manual: quote the section title.
    if SECTION_NUMBER.is_match(tag) {
        return match (xref.section_title(tag), xref.link_to_tag(document, tag)) {
            (Some(title), Some(href)) => quoted_link(&escape_html(title), &href),
            _ => tag.to_string(),
        };
    }

    let Some(href) = xref.link_to_tag(document, tag) else {
        return tag.to_string();
    };

    let (class, text) = if tag.starts_with(':') {
        ("tag command", tag)
    } else if let Some(name) = tag.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        ("tag option", name)
    } else {
        ("tag link", tag)
    };

    wrap_html(text, "a", &[("href", &href), ("class", class)])
}

fn quoted_link(title: &str, href: &str) -> String {
    format!("“{}”", wrap_html(title, "a", &[("href", href)]))
}
