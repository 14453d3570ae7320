//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Format(FormatError),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Custom(String),
}

/// A non-blank input line that does not fit the expected record shape.
///
/// `line` is 1-based, counted over the whole input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub line: usize,
    pub content: String,
    pub kind: FormatErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// `expected` is a minimum in POS mode and an exact count in chunk mode.
    FieldCount { expected: usize, found: usize },
    MalformedChunkTag(String),
    /// Line of an SSF document that is neither a sentence marker, a bracket nor a node.
    MalformedSsf,
}

impl FormatError {
    pub fn new(line: usize, content: &str, kind: FormatErrorKind) -> Self {
        Self {
            line,
            content: content.to_string(),
            kind,
        }
    }
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            Self::MalformedChunkTag(tag) => write!(f, "malformed chunk tag {:?}", tag),
            Self::MalformedSsf => write!(f, "malformed SSF line"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line, self.kind, self.content)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Error {
        Error::Format(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
