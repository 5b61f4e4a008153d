//! # Corpus
//!
//! A directory of help files rendered together. Loading reads every file,
//! applies the corrections and fills the cross-reference indexes; after
//! that each document renders independently.

use std::path::Path;

use thiserror::Error;

use crate::corrections::{self, Correction};
use crate::dialect::{Dialect, Grammars};
use crate::io::{self, IoError};
use crate::parsing::grammar::GrammarError;
use crate::parsing::blocks::Node;
use crate::parsing::html::{escape_html, wrap_html};
use crate::parsing::render::{self, RenderError};
use crate::parsing::{parse_document, render_document};
use crate::xref::{CrossReference, TagIndex, TitleIndex, document_id, is_user_manual};

const TOC_DOCUMENT: &str = "usr_toc";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("no document named `{0}`")]
    UnknownDocument(String),
}

/// A help file as read from disk, after corrections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub id: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub slug: String,
    pub title: String,
}

/// HTML fragments of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub id: String,
    pub title: String,
    /// File name of the page, without extension.
    pub slug: String,
    /// The `h1` of the page.
    pub header: String,
    pub html: String,
    /// The user manual table of contents, when the corpus has one.
    pub sidebar: Option<String>,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

#[derive(Debug)]
pub struct Corpus {
    documents: Vec<SourceDocument>,
    xref: CrossReference,
    grammars: Grammars,
    /// The parsed user manual table of contents, shared by every sidebar.
    toc: Option<Node>,
}

impl Corpus {
    /// Read every `*.txt` file of `help_dir` and the `tags` table at `tags_path`.
    pub fn load(
        help_dir: &Path,
        tags_path: &Path,
        corrections: &[Correction],
    ) -> Result<Self, CorpusError> {
        let tags = TagIndex::parse(&io::read_file(tags_path)?);
        log::debug!("{} tags read from {}", tags.len(), tags_path.display());

        let mut documents = Vec::new();
        for path in io::scan_help_files(help_dir)? {
            let id = document_id(&path.to_string_lossy()).to_string();
            let lines = io::read_lines(&path)?;
            documents.push(SourceDocument { id, lines });
        }

        Self::new(documents, tags, corrections)
    }

    pub fn new(
        documents: impl IntoIterator<Item = SourceDocument>,
        tags: TagIndex,
        corrections: &[Correction],
    ) -> Result<Self, CorpusError> {
        let mut documents: Vec<_> = documents.into_iter().collect();
        documents.sort_by(|a, b| a.id.cmp(&b.id));

        let mut titles = TitleIndex::new();
        for doc in &mut documents {
            let edited = corrections::apply(corrections, &doc.id, &mut doc.lines);
            if edited > 0 {
                log::debug!("{}: {edited} line(s) corrected", doc.id);
            }
            titles.add_document(&doc.id, &doc.lines);
        }

        let grammars = Grammars::new()?;
        let toc = documents
            .binary_search_by(|doc| doc.id.as_str().cmp(TOC_DOCUMENT))
            .ok()
            .map(|index| {
                let dialect = Dialect::SidebarToc;
                let lines = dialect.prepare(&documents[index].lines);
                parse_document(grammars.get(dialect), &lines).tree
            });

        Ok(Self {
            documents,
            xref: CrossReference::new(tags, titles),
            grammars,
            toc,
        })
    }

    pub fn xref(&self) -> &CrossReference {
        &self.xref
    }

    pub fn documents(&self) -> impl Iterator<Item = &SourceDocument> {
        self.documents.iter()
    }

    pub fn get(&self, id: &str) -> Option<&SourceDocument> {
        self.documents
            .binary_search_by(|doc| doc.id.as_str().cmp(id))
            .ok()
            .map(|index| &self.documents[index])
    }

    pub fn title<'a>(&'a self, id: &'a str) -> &'a str {
        self.xref.title(id).unwrap_or(id)
    }

    pub fn slug(&self, id: &str) -> String {
        self.xref.slug(id).unwrap_or_else(|| id.to_string())
    }

    pub fn render(&self, id: &str) -> Result<RenderedDocument, CorpusError> {
        let source = self
            .get(id)
            .ok_or_else(|| CorpusError::UnknownDocument(id.to_string()))?;

        let dialect = Dialect::for_document(id);
        log::debug!("{id}: rendering as {dialect:?}");
        let lines = dialect.prepare(&source.lines);
        let html = render_document(id, self.grammars.get(dialect), &lines, &self.xref)?;

        Ok(RenderedDocument {
            id: id.to_string(),
            title: self.title(id).to_string(),
            slug: self.slug(id),
            header: self.header(id),
            html,
            sidebar: self.sidebar(id)?,
            previous: self.neighbour(id, -1),
            next: self.neighbour(id, 1),
        })
    }

    /// Render every document, in identifier order.
    pub fn render_all(&self) -> Result<Vec<RenderedDocument>, CorpusError> {
        self.documents.iter().map(|doc| self.render(&doc.id)).collect()
    }

    /// The user manual table of contents as seen from `id`.
    pub fn sidebar(&self, id: &str) -> Result<Option<String>, CorpusError> {
        let Some(toc) = &self.toc else {
            return Ok(None);
        };
        let grammar = self.grammars.get(Dialect::SidebarToc);
        Ok(Some(render::render(id, grammar, toc, &self.xref)?))
    }

    fn header(&self, id: &str) -> String {
        let title = escape_html(self.title(id));
        match id.strip_prefix("usr_") {
            Some(number) if is_user_manual(id) => {
                let anchor = wrap_html(number, "a", &[("class", "header-anchor"), ("href", "#")]);
                wrap_html(&format!("{anchor}{title}"), "h1", &[])
            }
            _ => wrap_html(&title, "h1", &[]),
        }
    }

    /// The user manual chapter `offset` chapters away from `id`.
    fn neighbour(&self, id: &str, offset: isize) -> Option<PageLink> {
        if !is_user_manual(id) {
            return None;
        }
        let chapters: Vec<_> = self
            .documents
            .iter()
            .map(|doc| doc.id.as_str())
            .filter(|doc| is_user_manual(doc))
            .collect();
        let position = chapters.iter().position(|doc| *doc == id)?;
        let neighbour = chapters.get(position.checked_add_signed(offset)?)?;

        Some(PageLink {
            slug: self.slug(neighbour),
            title: self.title(neighbour).to_string(),
        })
    }
}
