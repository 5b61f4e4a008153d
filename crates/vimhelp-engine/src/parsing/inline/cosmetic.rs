use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::html::wrap_html;

use super::scan::replace_bounded;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?|ftp)://(?:[^\s<>&]|&amp;)+").expect("valid URL regex")
});
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([A-Za-z0-9]+)_").expect("valid emphasis regex"));

fn at_start_or_after_opening(prefix: &str) -> bool {
    prefix.is_empty() || prefix.ends_with(char::is_whitespace) || prefix.ends_with('(')
}

pub(crate) fn link_urls(text: &str) -> String {
    replace_bounded(
        text,
        &URL,
        at_start_or_after_opening,
        |_| true,
        |caps| {
            let matched = &caps[0];
            let url = matched.trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
            let trailing = &matched[url.len()..];
            format!("{}{trailing}", wrap_html(url, "a", &[("href", url)]))
        },
    )
}

pub(crate) fn emphasize(text: &str) -> String {
    replace_bounded(
        text,
        &EMPHASIS,
        at_start_or_after_opening,
        |rest| rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with(['.', ',', ';', ':', '!', '?', ')']),
        |caps| wrap_html(&caps[1], "strong", &[]),
    )
}
