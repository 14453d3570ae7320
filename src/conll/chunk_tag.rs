//! BIO chunk tags.
//!
//! Only `B-<TYPE>` and `I-<TYPE>` are accepted: a bare `O` (or any tag without
//! the `-` separator) is a malformed tag.
use std::fmt;
use std::str::FromStr;

use crate::error::FormatErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Opens a chunk.
    B,
    /// Continues the chunk opened before.
    I,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::B => write!(f, "B"),
            Label::I => write!(f, "I"),
        }
    }
}

/// A chunk tag decomposed into its label and phrase type (`NP`, `VP`...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkTag {
    label: Label,
    kind: String,
}

impl ChunkTag {
    pub fn new(label: Label, kind: impl Into<String>) -> Self {
        Self {
            label,
            kind: kind.into(),
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Phrase type of the chunk.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Legal-transition predicate.
    ///
    /// Returns `true` when this tag continues the chunk of type `open`,
    /// that is when it is an `I-` tag of the very same type.
    /// Any other tag has to open a new chunk.
    ///
    /// Both the tag repair pass and the chunk builder decide on this predicate only.
    pub fn continues(&self, open: Option<&str>) -> bool {
        self.label == Label::I && open == Some(self.kind.as_str())
    }

    /// Returns the tag rewritten as a chunk opener.
    pub fn into_opener(self) -> Self {
        Self {
            label: Label::B,
            kind: self.kind,
        }
    }
}

impl FromStr for ChunkTag {
    type Err = FormatErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FormatErrorKind::MalformedChunkTag(s.to_string());
        let (label, kind) = s.split_once('-').ok_or_else(malformed)?;
        let label = match label {
            "B" => Label::B,
            "I" => Label::I,
            _ => return Err(malformed()),
        };
        if kind.is_empty() {
            return Err(malformed());
        }
        Ok(Self::new(label, kind))
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.label, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChunkTag, Label};
    use crate::error::FormatErrorKind;

    #[test]
    fn parse() {
        let tag: ChunkTag = "B-NP".parse().unwrap();
        assert_eq!(tag.label(), Label::B);
        assert_eq!(tag.kind(), "NP");

        // split happens on the first separator only
        let tag: ChunkTag = "I-NP-X".parse().unwrap();
        assert_eq!(tag.label(), Label::I);
        assert_eq!(tag.kind(), "NP-X");
    }

    #[test]
    fn bare_o_is_malformed() {
        let err = "O".parse::<ChunkTag>().unwrap_err();
        assert_eq!(err, FormatErrorKind::MalformedChunkTag("O".to_string()));
    }

    #[test]
    fn other_labels_are_malformed() {
        assert!("E-NP".parse::<ChunkTag>().is_err());
        assert!("B-".parse::<ChunkTag>().is_err());
        assert!("".parse::<ChunkTag>().is_err());
    }

    #[test]
    fn continues() {
        let inside = ChunkTag::new(Label::I, "NP");
        assert!(inside.continues(Some("NP")));
        assert!(!inside.continues(Some("VP")));
        assert!(!inside.continues(Some("NPX")));
        assert!(!inside.continues(None));

        let begin = ChunkTag::new(Label::B, "NP");
        assert!(!begin.continues(Some("NP")));
    }

    #[test]
    fn display() {
        let tag = ChunkTag::new(Label::I, "VGF");
        assert_eq!(tag.to_string(), "I-VGF");
        assert_eq!(tag.into_opener().to_string(), "B-VGF");
    }
}
