/*! SSF reading

Reads SSF text (as produced by [super::PosBuilder] and [super::ChunkBuilder]) back into records.

Tokens of a bracket group get a chunk tag: `B-<TYPE>` for the first one, `I-<TYPE>` for the following ones.
Tokens outside of any group have no chunk tag.
!*/
use crate::conll::{ChunkTag, Label, Record};
use crate::error::{FormatError, FormatErrorKind};

/// A sentence read from SSF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsfSentence {
    pub id: usize,
    pub records: Vec<Record>,
}

/// Parse the id out of a `<Sentence id='N'>` marker.
fn sentence_id(line: &str) -> Option<usize> {
    line.strip_prefix("<Sentence id=")?
        .strip_suffix('>')?
        .trim_matches(|c: char| c == '\'' || c == '"')
        .parse()
        .ok()
}

/// Parse SSF text.
pub fn parse(text: &str) -> Result<Vec<SsfSentence>, FormatError> {
    let mut sentences = Vec::new();
    let mut current: Option<SsfSentence> = None;
    // type of the open group, and whether a token has been read in it
    let mut group: Option<(String, bool)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let malformed = || FormatError::new(idx + 1, raw, FormatErrorKind::MalformedSsf);
        let line = raw.trim_end_matches('\r');
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if let Some(id) = sentence_id(trimmed) {
            if current.is_some() {
                return Err(malformed());
            }
            current = Some(SsfSentence {
                id,
                records: Vec::new(),
            });
            continue;
        }

        if trimmed == "</Sentence>" {
            sentences.push(current.take().ok_or_else(malformed)?);
            group = None;
            continue;
        }
        if trimmed == "))" {
            group.take().ok_or_else(malformed)?;
            continue;
        }

        let sentence = current.as_mut().ok_or_else(malformed)?;

        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            // group numbers have no dot, token indexes are `group.index`
            [number, "((", kind, ..] if !number.contains('.') => {
                if group.is_some() {
                    return Err(malformed());
                }
                group = Some((kind.to_string(), false));
            }
            [_, token, pos, ..] => {
                let chunk = group.as_mut().map(|(kind, seen)| {
                    let label = if *seen { Label::I } else { Label::B };
                    *seen = true;
                    ChunkTag::new(label, kind.as_str())
                });
                sentence.records.push(Record::new(*token, *pos, chunk));
            }
            _ => return Err(malformed()),
        }
    }

    match current {
        Some(_) => Err(FormatError::new(
            text.lines().count(),
            "",
            FormatErrorKind::MalformedSsf,
        )),
        None => Ok(sentences),
    }
}

/// Render sentences as CoNLL lines, each sentence followed by a blank line.
pub fn to_conll(sentences: &[SsfSentence]) -> Vec<String> {
    sentences
        .iter()
        .flat_map(|s| {
            s.records
                .iter()
                .map(Record::to_string)
                .chain(std::iter::once(String::new()))
        })
        .collect()
}
