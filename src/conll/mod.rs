/*! CoNLL input

Tab-separated token annotation, one token per line, sentences separated by blank lines.

Two layouts are read, depending on the [Mode]:
- [Mode::Pos]: `token \t ... \t pos`, the POS tag being the last field.
- [Mode::Chunk]: `token \t pos \t chunk`, where `chunk` is a `B-`/`I-` prefixed [ChunkTag].
!*/
mod chunk_tag;
mod record;

use std::fmt;
use std::str::FromStr;

pub use chunk_tag::{ChunkTag, Label};
pub use record::{parse_lines, Line, Record};

/// Annotation task, selected by the `--opr` flag (`0` or `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pos,
    Chunk,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Mode::Pos),
            "1" => Ok(Mode::Chunk),
            other => Err(format!(
                "invalid operation {:?}: use 0 for POS tagging, 1 for chunking",
                other
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Pos => write!(f, "pos"),
            Mode::Chunk => write!(f, "chunk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mode;

    #[test]
    fn mode_from_opr() {
        assert_eq!("0".parse::<Mode>(), Ok(Mode::Pos));
        assert_eq!("1".parse::<Mode>(), Ok(Mode::Chunk));
        assert!("2".parse::<Mode>().is_err());
    }
}
