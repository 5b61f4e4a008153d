//! # Cross-References
//!
//! Read-only indexes consulted while rendering:
//!
//! - **`tags`**: `TagIndex`, which document defines each tag
//! - **`titles`**: `TitleIndex`, display titles of documents and manual sections
//!
//! Both are filled before any document is rendered and never change
//! afterwards, so a `CrossReference` can be shared across threads.

pub mod tags;
pub mod titles;

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::grammar::helpers::to_kebab_case;
use crate::parsing::html::encode_uri_component;

pub use tags::TagIndex;
pub use titles::TitleIndex;

static USER_MANUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^usr_\d{2}$").expect("valid user manual regex"));

/// Whether `id` names a chapter of the user manual (`usr_01` .. `usr_99`).
pub fn is_user_manual(id: &str) -> bool {
    USER_MANUAL.is_match(id)
}

/// Strip the directories and every extension from a file name.
pub fn document_id(file: &str) -> &str {
    let name = file.rsplit('/').next().unwrap_or(file);
    name.split('.').next().unwrap_or(name)
}

#[derive(Debug, Clone, Default)]
pub struct CrossReference {
    tags: TagIndex,
    titles: TitleIndex,
}

impl CrossReference {
    pub fn new(tags: TagIndex, titles: TitleIndex) -> Self {
        Self { tags, titles }
    }

    pub fn tags(&self) -> &TagIndex {
        &self.tags
    }

    pub fn titles(&self) -> &TitleIndex {
        &self.titles
    }

    pub fn owner(&self, tag: &str) -> Option<&str> {
        self.tags.owner(tag)
    }

    pub fn title(&self, document: &str) -> Option<&str> {
        self.titles.title(document)
    }

    /// Title of a numbered manual section, looked up in the page owning it.
    pub fn section_title(&self, tag: &str) -> Option<&str> {
        self.titles.section(self.owner(tag)?, tag)
    }

    /// Page name of a titled document: `02-the-first-steps-in-vim` for a
    /// manual chapter, the kebab-cased title otherwise.
    pub fn slug(&self, document: &str) -> Option<String> {
        let title = to_kebab_case(self.title(document)?);
        Some(match document.strip_prefix("usr_") {
            Some(number) if is_user_manual(document) => format!("{number}-{title}"),
            _ => title,
        })
    }

    /// Where `tag` points when referenced from `from`.
    ///
    /// Tags of the same document become fragment links. Tags of another
    /// document need that document to have a title; a tag naming the whole
    /// page (`usr_02.txt`) links to the page without a fragment.
    pub fn link_to_tag(&self, from: &str, tag: &str) -> Option<String> {
        let owner = self.owner(tag)?;
        if owner == from {
            return Some(format!("#{}", encode_uri_component(tag)));
        }

        let mut link = format!("/{}", self.slug(owner)?);
        if tag.strip_suffix(".txt") != Some(owner) {
            link.push('#');
            link.push_str(&encode_uri_component(tag));
        }
        Some(link)
    }
}
