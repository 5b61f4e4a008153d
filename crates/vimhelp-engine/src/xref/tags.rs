use std::collections::HashMap;

use super::document_id;

/// Tag name to the identifier of the document defining it.
///
/// Built from Vim's `tags` file: one `tag<TAB>file<TAB>pattern` record per
/// line. A tag defined twice belongs to its last definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    owners: HashMap<String, String>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(table: &str) -> Self {
        let mut index = Self::new();
        for (number, line) in table.lines().enumerate().filter(|(_, l)| !l.is_empty()) {
            let mut fields = line.split('\t');
            match (fields.next(), fields.next()) {
                (Some(tag), Some(file)) if !tag.is_empty() && !file.is_empty() => {
                    index.insert(tag, document_id(file));
                }
                _ => log::warn!("tags:{}: skipping malformed record `{line}`", number + 1),
            }
        }
        index
    }

    pub fn insert(&mut self, tag: impl Into<String>, document: impl Into<String>) {
        self.owners.insert(tag.into(), document.into());
    }

    pub fn owner(&self, tag: &str) -> Option<&str> {
        self.owners.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl<T: Into<String>, D: Into<String>> FromIterator<(T, D)> for TagIndex {
    fn from_iter<I: IntoIterator<Item = (T, D)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (tag, document) in iter {
            index.insert(tag, document);
        }
        index
    }
}
