use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::html::wrap_html;

use super::scan::{anywhere, next_char, replace_bounded};

static KEY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&lt;[A-Z][A-Za-z-]+&gt;").expect("valid key name regex"));
static CHORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCTRL-(?:Break|[^&<\s])").expect("valid chord regex"));
static KEYSTROKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:&#?[0-9A-Za-z]+;|[^\s&<>(),.;!?])").expect("valid keystroke regex")
});

/// Short words that follow a chord in prose rather than complete it. A
/// single letter is always a keystroke (`CTRL-R a`, `CTRL-W o`).
const COMMON_WORDS: &[&str] = &[
    "an", "as", "at", "be", "by", "do", "if", "in", "is", "it", "no", "of", "on", "or", "so",
    "to", "up", "and", "are", "can", "for", "has", "not", "now", "the", "was", "you",
];

const NON_BREAKING_HYPHEN: &str = "&#8209;";

/// Wrap `<Key>` names and `CTRL-x` chords in `<kbd>`.
pub(crate) fn wrap_key_bindings(text: &str) -> String {
    let text = replace_bounded(
        text,
        &KEY_NAME,
        |prefix| prefix.is_empty() || prefix.ends_with(' ') || prefix.ends_with("&gt;"),
        anywhere,
        |caps| kbd(&caps[0]),
    );
    wrap_chords(&text)
}

fn kbd(keys: &str) -> String {
    wrap_html(&keys.replace('-', NON_BREAKING_HYPHEN), "kbd", &[])
}

/// `CTRL-X CTRL-F` becomes one `<kbd>`; `CTRL-W k` becomes a `<code>` holding
/// the chord and its extra keystrokes.
fn wrap_chords(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(chord) = CHORD.find_at(text, pos) {
        // Chords inside an anchor target stay as they are.
        if text[..chord.start()].ends_with('#') {
            pos = next_char(text, chord.start());
            continue;
        }

        out.push_str(&text[copied..chord.start()]);
        let rest = &text[chord.end()..];

        if let Some(second) = rest.strip_prefix(' ').and_then(|r| CHORD.find(r))
            && second.start() == 0
        {
            let end = chord.end() + 1 + second.end();
            out.push_str(&kbd(&text[chord.start()..end]));
            copied = end;
        } else if let Some(suffix) = keystroke_suffix(chord.as_str(), rest) {
            out.push_str(&wrap_html(
                &format!("{} {suffix}", kbd(chord.as_str())),
                "code",
                &[],
            ));
            copied = chord.end() + 1 + suffix.len();
        } else {
            out.push_str(&kbd(chord.as_str()));
            copied = chord.end();
        }
        pos = copied;
    }

    out.push_str(&text[copied..]);
    out
}

/// The keystrokes typed after `chord`, if `rest` starts with a short run of
/// them rather than with an ordinary word.
fn keystroke_suffix<'t>(chord: &str, rest: &'t str) -> Option<&'t str> {
    let candidate = rest.strip_prefix(' ')?;
    let max_keys = if chord == "CTRL-V" { 3 } else { 2 };

    let mut len = 0;
    let mut keys = 0;
    while let Some(key) = KEYSTROKE.find(&candidate[len..]) {
        len += key.end();
        keys += 1;
        if keys > max_keys {
            return None;
        }
    }

    let suffix = &candidate[..len];
    let terminated = candidate[len..]
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || "),.;!?".contains(c));

    (keys > 0 && terminated && !COMMON_WORDS.contains(&suffix)).then_some(suffix)
}
