//! Line-numbered fixes applied to the raw help files before parsing.
//!
//! A few lines of the user manual are inconsistent with the rest of it
//! (a missing full stop, mixed indentation, a formatted block that should be
//! a list). Each fix names a document, the 1-based line or range of lines it
//! touches, and one edit.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid line range `{0}`: expected `N` or `N-M` with 1 <= N <= M")]
pub struct LineRangeError(String);

/// One line (`12`) or an inclusive range of lines (`96-100`), 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLineRange", into = "RawLineRange")]
pub struct LineRange {
    first: usize,
    last: usize,
}

impl LineRange {
    pub fn single(line: usize) -> Result<Self, LineRangeError> {
        Self::new(line, line)
    }

    pub fn new(first: usize, last: usize) -> Result<Self, LineRangeError> {
        if first == 0 || last < first {
            return Err(LineRangeError(format!("{first}-{last}")));
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    /// Zero-based indexes of the lines.
    fn indexes(&self) -> RangeInclusive<usize> {
        self.first - 1..=self.last - 1
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

impl std::str::FromStr for LineRange {
    type Err = LineRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LineRangeError(s.to_string());
        let number = |n: &str| n.trim().parse::<usize>().map_err(|_| invalid());

        let range = match s.split_once('-') {
            Some((first, last)) => Self::new(number(first)?, number(last)?),
            None => Self::single(number(s)?),
        };
        range.map_err(|_| invalid())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawLineRange {
    Line(usize),
    Range(String),
}

impl TryFrom<RawLineRange> for LineRange {
    type Error = LineRangeError;

    fn try_from(raw: RawLineRange) -> Result<Self, Self::Error> {
        match raw {
            RawLineRange::Line(line) => LineRange::single(line),
            RawLineRange::Range(range) => range.parse(),
        }
    }
}

impl From<LineRange> for RawLineRange {
    fn from(range: LineRange) -> Self {
        if range.first == range.last {
            RawLineRange::Line(range.first)
        } else {
            RawLineRange::Range(range.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    /// Replace the first occurrence of `from`.
    Replace { from: String, to: String },
    Append { text: String },
    Trim,
    TrimStart,
}

impl Edit {
    pub fn apply(&self, line: &str) -> String {
        match self {
            Edit::Replace { from, to } => line.replacen(from.as_str(), to, 1),
            Edit::Append { text } => format!("{line}{text}"),
            Edit::Trim => line.trim().to_string(),
            Edit::TrimStart => line.trim_start().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Identifier of the document, e.g. `usr_05`.
    pub document: String,
    pub lines: LineRange,
    pub edit: Edit,
}

impl Correction {
    pub fn new(document: impl Into<String>, lines: LineRange, edit: Edit) -> Self {
        Self {
            document: document.into(),
            lines,
            edit,
        }
    }
}

/// Apply, in order, every correction aimed at `document`.
///
/// Returns how many lines were edited. A correction reaching past the end
/// of the document edits what exists and logs a warning.
pub fn apply(corrections: &[Correction], document: &str, lines: &mut [String]) -> usize {
    let mut edited = 0;

    for correction in corrections.iter().filter(|c| c.document == document) {
        if correction.lines.last() > lines.len() {
            log::warn!(
                "{document}: correction on line {} but the document has {} lines",
                correction.lines,
                lines.len()
            );
        }

        for index in correction.lines.indexes() {
            if let Some(line) = lines.get_mut(index) {
                *line = correction.edit.apply(line);
                edited += 1;
            }
        }
    }

    edited
}

/// Fixes for the user manual as distributed with Vim 8.2.
pub fn builtin() -> Vec<Correction> {
    fn line(n: usize) -> LineRange {
        LineRange { first: n, last: n }
    }
    fn replace(from: &str, to: &str) -> Edit {
        Edit::Replace {
            from: from.into(),
            to: to.into(),
        }
    }
    let append = |text: &str| Edit::Append { text: text.into() };

    vec![
        Correction::new("usr_01", line(168), Edit::Trim),
        Correction::new("usr_01", line(168), append(".")),
        Correction::new("usr_02", line(695), append(".")),
        Correction::new("usr_04", line(467), replace("correction", "corrections")),
        Correction::new("usr_05", line(236), replace("@@@", "\"@@@\"")),
        Correction::new("usr_05", line(412), replace("\t   \t", "\t\t")),
        Correction::new("usr_10", line(447), replace("\"$A XXX<Esc>", "\"$A XXX<Esc>\"")),
        Correction::new("usr_21", LineRange { first: 96, last: 100 }, replace("\t", "- ")),
        Correction::new("usr_24", line(554), replace("--", "-- ")),
        Correction::new("usr_24", LineRange { first: 552, last: 554 }, Edit::TrimStart),
        Correction::new("usr_29", line(428), replace("/* - */", "\"/* - */\"")),
    ]
}
