use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::html::wrap_html;

use super::scan::{anywhere, at_end_or_before_space, at_start_or_after_space, replace_bounded};

static QUOTED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:&quot;|`)([^ ]+?)(?:&quot;|`)").expect("valid quoted word regex")
});
static QUOTED_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&quot;([:#][^<>]+?)&quot;").expect("valid quoted command regex"));
static REGISTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&quot;[a-z=]").expect("valid register regex"));
static MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['`](?:&quot;|.)").expect("valid mark regex"));
// Both must end on a word boundary and start a word: `my.vimrc` and `a$b` stay text.
static FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_]+\.(?:bat|c|h|txt|vim)\b").expect("valid filename regex")
});
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\w+").expect("valid variable regex"));
static SINGLE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]\b").expect("valid single key regex"));
static SPECIAL_CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\)|\[\]|\{\}|&lt;|&gt;|[$^.,?`%/()\[\]]").expect("valid special character regex")
});
static PARENTHESISED_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:/]").expect("valid parenthesised character regex"));

const COMMENT_SNIPPET: &str = "&quot;/* - */&quot;";

fn code(text: &str) -> String {
    wrap_html(text, "code", &[])
}

/// Wrap the tokens that read as code in `<code>`.
///
/// The patterns run in a fixed order; each one only sees what the previous
/// ones left as plain text.
pub(crate) fn wrap_inline_code(text: &str) -> String {
    let text = QUOTED_WORD.replace_all(text, |caps: &regex::Captures<'_>| code(&caps[1]));
    let text = QUOTED_COMMAND.replace_all(&text, |caps: &regex::Captures<'_>| code(&caps[1]));

    let text = replace_bounded(&text, &REGISTER, anywhere, |rest| rest.starts_with(' '), |caps| {
        code(&caps[0])
    });
    let text = replace_bounded(
        &text,
        &MARK,
        at_start_or_after_space,
        at_end_or_before_space,
        |caps| code(&caps[0]),
    );
    let text = replace_bounded(&text, &FILENAME, at_start_or_after_space, anywhere, |caps| {
        code(&caps[0])
    });
    let text = replace_bounded(
        &text,
        &VARIABLE,
        |prefix| prefix.is_empty() || prefix.ends_with(char::is_whitespace) || prefix.ends_with('('),
        anywhere,
        |caps| code(&caps[0]),
    );
    let text = replace_bounded(&text, &SINGLE_KEY, is_key_slot, anywhere, |caps| {
        code(&caps[0])
    });
    let text = replace_bounded(
        &text,
        &SPECIAL_CHARACTER,
        at_start_or_after_space,
        |rest| rest.is_empty() || rest.starts_with([' ', ',', '.']),
        |caps| code(&caps[0]),
    );
    let text = replace_bounded(
        &text,
        &PARENTHESISED_CHARACTER,
        |prefix| prefix.ends_with('('),
        |rest| rest.starts_with(')'),
        |caps| code(&caps[0]),
    );

    text.replacen(COMMENT_SNIPPET, &code("/* - */"), 1)
}

/// A single letter right after "press " or "register ".
fn is_key_slot(prefix: &str) -> bool {
    prefix.ends_with("press ") || prefix.ends_with("register ")
}
