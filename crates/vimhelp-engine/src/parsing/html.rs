//! Small HTML building blocks shared by the grammars and the inline passes.

/// Wrap `text` in `<tag attr="value" ...>`, keeping the attribute order.
pub fn wrap_html(text: &str, tag: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len() + 2 * tag.len() + 5);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs.iter().filter(|(name, _)| !name.is_empty()) {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
    out.push_str(text);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Escape `&`, `<`, `>` and `"`.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Percent-encode like `encodeURIComponent`, which leaves `!'()*` alone.
pub fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
