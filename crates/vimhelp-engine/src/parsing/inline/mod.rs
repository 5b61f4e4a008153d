//! # Inline Formatting
//!
//! A chain of rewrite passes over the escaped text of leaf blocks.
//!
//! ## Pass Order
//!
//! 1. **`tags`**: `|tag|` references, then loose `'option'` names
//! 2. **`keys`**: `<Key>` names and `CTRL-x` chords
//! 3. **`code`**: quoted words, registers, marks, file names, variables and
//!    lone punctuation
//! 4. **`cosmetic`**: URLs, then `_emphasis_`
//!
//! There is no "already formatted" marker. A pass leaves alone the markup
//! emitted before it only because its patterns need delimiters (start of
//! text, a space, an opening parenthesis) that markup never provides. The
//! order is pinned by the tests below.

pub mod code;
pub mod cosmetic;
pub mod keys;
pub mod scan;
pub mod tags;

use crate::xref::CrossReference;

/// Formats leaf text as seen from one document.
#[derive(Debug, Clone, Copy)]
pub struct InlineFormatter<'a> {
    document: &'a str,
    xref: &'a CrossReference,
}

impl<'a> InlineFormatter<'a> {
    pub fn new(document: &'a str, xref: &'a CrossReference) -> Self {
        Self { document, xref }
    }

    /// Format one escaped line.
    pub fn format(&self, text: &str) -> String {
        let text = tags::create_tags(self.document, self.xref, text);
        let text = keys::wrap_key_bindings(&text);
        let text = code::wrap_inline_code(&text);
        let text = cosmetic::link_urls(&text);
        cosmetic::emphasize(&text)
    }
}
