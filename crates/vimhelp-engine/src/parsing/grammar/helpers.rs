use std::sync::LazyLock;

use regex::Regex;

static TAG_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\*[^*\s]+\*").expect("valid tag target regex"));
static KEBAB_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ,.'?!]+").expect("valid kebab regex"));
static CODE_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&lt;(?: |\t)| &gt;$").expect("valid code marker regex"));
static MULTIPLE_TABS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t{2,}").expect("valid tab regex"));
static FILE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*[^*\s]+\.txt\*").expect("valid file title regex"));

pub fn is_empty(line: &str) -> bool {
    line.is_empty()
}

/// The `*name.txt*\tFor Vim version ...` line that opens a help file.
pub fn is_file_title(line: &str) -> bool {
    FILE_TITLE.is_match(line)
}

/// `=====` lines separate the sections of a help file.
pub fn is_separator(line: &str) -> bool {
    line.starts_with("=====")
}

/// Whether `line` starts with `n` copies of `c`.
pub fn starts_with_n(line: &str, c: char, n: usize) -> bool {
    line.chars().take(n).filter(|&x| x == c).count() == n
}

pub fn to_kebab_case(text: &str) -> String {
    KEBAB_SEPARATORS
        .replace_all(&text.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Drop the `*tag*` anchor targets from a header line.
pub fn remove_tag_targets(line: &str) -> String {
    TAG_TARGET.replace_all(line, "").trim().to_string()
}

/// Drop the `<` and `>` markers that open and close command examples.
pub fn remove_code_markers(line: &str) -> String {
    if line == "&lt;" || line == "&gt;" {
        return String::new();
    }
    CODE_MARKERS.replace_all(line, "").trim().to_string()
}

/// Put the first cell of a table row on its own line, followed by the other
/// cells of the first line and the continuation lines.
pub fn split_first_cell(lines: Vec<String>) -> Vec<String> {
    let mut lines = lines.into_iter();
    let Some(first) = lines.next() else {
        return Vec::new();
    };

    let mut cells = vec![first.split('\t').next().unwrap_or_default().to_string()];
    cells.extend(
        MULTIPLE_TABS
            .replace_all(&first, "\t")
            .split('\t')
            .skip(1)
            .map(str::to_string),
    );
    cells.extend(lines);
    cells
}

/// Remove the tab indentation shared by every line of a block.
///
/// A single line simply loses its surrounding whitespace.
pub fn remove_block_indentation(lines: Vec<String>) -> Vec<String> {
    if let [line] = lines.as_slice() {
        return vec![line.trim().to_string()];
    }

    let mut indent = 0;
    while !lines.is_empty() && lines.iter().all(|l| starts_with_n(l, '\t', indent + 1)) {
        indent += 1;
    }

    lines.into_iter().map(|l| l[indent..].to_string()).collect()
}
