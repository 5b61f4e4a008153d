use regex::{Captures, Regex};

/// Replace the matches of `re` whose surroundings pass the given checks.
///
/// `before` sees the text preceding a match and `after` the text following
/// it, both taken from the input rather than from the partial output. When a
/// check fails the search resumes one character after the start of the
/// rejected match, so an overlapping candidate can still be found.
pub(crate) fn replace_bounded(
    text: &str,
    re: &Regex,
    before: impl Fn(&str) -> bool,
    after: impl Fn(&str) -> bool,
    mut replace: impl FnMut(&Captures<'_>) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(m) = caps.get(0) else {
            break;
        };

        if before(&text[..m.start()]) && after(&text[m.end()..]) {
            out.push_str(&text[copied..m.start()]);
            out.push_str(&replace(&caps));
            copied = m.end();
            pos = if m.is_empty() {
                next_char(text, m.end())
            } else {
                m.end()
            };
        } else {
            pos = next_char(text, m.start());
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Byte offset of the character after the one at `i`.
pub(crate) fn next_char(text: &str, i: usize) -> usize {
    i + text[i..].chars().next().map_or(1, char::len_utf8)
}

pub(crate) fn at_start_or_after_space(prefix: &str) -> bool {
    prefix.is_empty() || prefix.ends_with(' ')
}

pub(crate) fn at_end_or_before_space(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with(' ')
}

pub(crate) fn anywhere(_: &str) -> bool {
    true
}
