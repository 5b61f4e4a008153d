use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::grammar::helpers::remove_tag_targets;

use super::is_user_manual;

static SECTION_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*(\d{2}\.\d{1,2})\*").expect("valid section target regex"));

/// Line holding the chapter title of a user manual page.
const MANUAL_TITLE_LINE: usize = 4;

/// Display titles of documents and of the numbered user manual sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleIndex {
    documents: HashMap<String, String>,
    sections: HashMap<(String, String), String>,
}

impl Default for TitleIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleIndex {
    /// An index holding the two pages whose titles are fixed.
    pub fn new() -> Self {
        let mut index = Self::empty();
        index.insert("index", "Vim Index");
        index.insert("usr_toc", "Table of contents");
        index
    }

    pub fn empty() -> Self {
        Self {
            documents: HashMap::new(),
            sections: HashMap::new(),
        }
    }

    /// Register a document from its lines.
    ///
    /// User manual pages are titled by their fifth line and contribute their
    /// `*NN.N*` section titles; other documents are titled by their
    /// identifier. Titles already present are kept.
    pub fn add_document<S: AsRef<str>>(&mut self, id: &str, lines: &[S]) {
        if !self.documents.contains_key(id) {
            let title = if is_user_manual(id) {
                match lines.get(MANUAL_TITLE_LINE) {
                    Some(line) => line.as_ref().trim().to_string(),
                    None => {
                        log::warn!("{id}: too short to hold a chapter title");
                        id.to_string()
                    }
                }
            } else {
                id.to_string()
            };
            self.insert(id, title);
        }

        for line in lines.iter().map(AsRef::as_ref) {
            if let Some(caps) = SECTION_TARGET.captures(line) {
                self.sections
                    .entry((id.to_string(), caps[1].to_string()))
                    .or_insert_with(|| remove_tag_targets(line));
            }
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.documents.insert(id.into(), title.into());
    }

    pub fn insert_section(
        &mut self,
        document: impl Into<String>,
        number: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.sections
            .insert((document.into(), number.into()), title.into());
    }

    pub fn title(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    pub fn section(&self, document: &str, number: &str) -> Option<&str> {
        self.sections
            .get(&(document.to_string(), number.to_string()))
            .map(String::as_str)
    }

    /// Identifiers of every titled document, sorted.
    pub fn documents(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.documents.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
