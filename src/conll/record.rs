//! CoNLL records and line parsing.
use std::fmt;

use itertools::Itertools;

use super::{ChunkTag, Mode};
use crate::error::{FormatError, FormatErrorKind};

/// A single annotated token.
///
/// `chunk` is only set in [Mode::Chunk].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub token: String,
    pub pos: String,
    pub chunk: Option<ChunkTag>,
}

impl Record {
    pub fn new(token: impl Into<String>, pos: impl Into<String>, chunk: Option<ChunkTag>) -> Self {
        Self {
            token: token.into(),
            pos: pos.into(),
            chunk,
        }
    }

    /// Parse a POS record: `token \t ... \t pos`.
    ///
    /// Any number of fields (>= 2) is accepted, the tag being the last one.
    pub fn parse_pos(line: &str) -> Result<Self, FormatErrorKind> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        match (fields.first(), fields.last()) {
            (Some(token), Some(pos)) if fields.len() >= 2 => Ok(Self::new(*token, *pos, None)),
            _ => Err(FormatErrorKind::FieldCount {
                expected: 2,
                found: fields.len(),
            }),
        }
    }

    /// Parse a chunk record: `token \t pos \t chunk`.
    pub fn parse_chunk(line: &str) -> Result<Self, FormatErrorKind> {
        let line = line.trim();
        let (token, pos, chunk) = line
            .split('\t')
            .collect_tuple()
            .ok_or_else(|| FormatErrorKind::FieldCount {
                expected: 3,
                found: line.split('\t').count(),
            })?;
        let chunk: ChunkTag = chunk.parse()?;
        Ok(Self::new(token, pos, Some(chunk)))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.token, self.pos)?;
        if let Some(chunk) = &self.chunk {
            write!(f, "\t{}", chunk)?;
        }
        Ok(())
    }
}

/// An input line: either a sentence boundary or a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    Record(Record),
}

impl Line {
    pub fn parse(line: &str, mode: Mode) -> Result<Self, FormatErrorKind> {
        if line.trim().is_empty() {
            return Ok(Line::Blank);
        }
        let record = match mode {
            Mode::Pos => Record::parse_pos(line)?,
            Mode::Chunk => Record::parse_chunk(line)?,
        };
        Ok(Line::Record(record))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Blank => Ok(()),
            Line::Record(r) => r.fmt(f),
        }
    }
}

/// Parse raw lines, stopping at the first malformed one.
///
/// The returned error carries the 1-based line number and the offending line.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], mode: Mode) -> Result<Vec<Line>, FormatError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let line = line.as_ref();
            Line::parse(line, mode).map_err(|kind| FormatError::new(idx + 1, line, kind))
        })
        .collect()
}
