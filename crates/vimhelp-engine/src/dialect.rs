//! Which grammar reads a document, and which of its lines it gets to see.

use crate::parsing::grammar::helpers::is_file_title;
use crate::parsing::grammar::{self, Grammar, GrammarError};
use crate::xref::is_user_manual;

/// Header and footer lines around the body of a user manual page.
const USR_HEADER: usize = 7;
const USR_FOOTER: usize = 5;

/// Header and footer lines around the chapter list of `usr_toc.txt`.
const TOC_HEADER: usize = 56;
const TOC_FOOTER: usize = 4;

const CHAPTER_NAVIGATION: [&str; 3] = ["     Next chapter:", " Previous chapter:", "Table of contents:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Any help file that is not part of the user manual.
    Help,
    /// A chapter of the user manual, `usr_01` .. `usr_90`.
    UserManual,
    /// The table of contents page of the user manual.
    UserManualToc,
    /// The user manual table of contents shown beside a page.
    SidebarToc,
}

impl Dialect {
    /// Dialect of a document rendered as a page.
    pub fn for_document(id: &str) -> Self {
        if id == "usr_toc" {
            Dialect::UserManualToc
        } else if is_user_manual(id) {
            Dialect::UserManual
        } else {
            Dialect::Help
        }
    }

    /// Select the lines of a raw document this dialect renders.
    pub fn prepare<S: AsRef<str>>(self, lines: &[S]) -> Vec<String> {
        match self {
            Dialect::UserManual => body(lines, USR_HEADER, USR_FOOTER)
                .iter()
                .map(AsRef::as_ref)
                .filter(|line| !CHAPTER_NAVIGATION.iter().any(|nav| line.starts_with(*nav)))
                .map(str::to_string)
                .collect(),
            Dialect::UserManualToc | Dialect::SidebarToc => body(lines, TOC_HEADER, TOC_FOOTER)
                .iter()
                .map(|line| line.as_ref().to_string())
                .collect(),
            Dialect::Help => {
                // The title line repeats what the page header already shows.
                let title = lines.first().is_some_and(|line| is_file_title(line.as_ref()));
                let skip = usize::from(title);
                let mut lines: Vec<String> = lines[skip..]
                    .iter()
                    .map(|line| line.as_ref().to_string())
                    .collect();
                while lines
                    .last()
                    .is_some_and(|line| line.trim().is_empty() || is_modeline(line))
                {
                    lines.pop();
                }
                lines
            }
        }
    }
}

/// Lines between a fixed header and footer, empty when there are too few.
fn body<S>(lines: &[S], header: usize, footer: usize) -> &[S] {
    match lines.len().checked_sub(footer) {
        Some(end) if end > header => &lines[header..end],
        _ => &[],
    }
}

fn is_modeline(line: &str) -> bool {
    line.contains(" vim:") || line.starts_with("vim:")
}

/// Every dialect's grammar, built once.
#[derive(Debug, Clone)]
pub struct Grammars {
    help: Grammar,
    usr: Grammar,
    usr_toc: Grammar,
    sidebar: Grammar,
}

impl Grammars {
    pub fn new() -> Result<Self, GrammarError> {
        Ok(Self {
            help: grammar::help::grammar()?,
            usr: grammar::usr::grammar()?,
            usr_toc: grammar::usr_toc::grammar()?,
            sidebar: grammar::toc::grammar()?,
        })
    }

    pub fn get(&self, dialect: Dialect) -> &Grammar {
        match dialect {
            Dialect::Help => &self.help,
            Dialect::UserManual => &self.usr,
            Dialect::UserManualToc => &self.usr_toc,
            Dialect::SidebarToc => &self.sidebar,
        }
    }
}
