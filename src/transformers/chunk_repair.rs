/*! BIO continuation repair

An `I-` tag is only legal right after a tag of the same type, in the same sentence.
Every other `I-` tag is rewritten into a `B-` one:

- `I-NP` as first token of a sentence becomes `B-NP`,
- `B-NP I-VP` becomes `B-NP B-VP`.

`B-` tags and legal `I-` tags are kept unchanged. The state is reset on each blank line.
!*/
use log::debug;

use super::Transform;
use crate::conll::{ChunkTag, Label, Line};

#[derive(Debug, Default)]
pub struct ChunkRepair;

/// Tag of the previous record of the current sentence.
#[derive(Debug, Default)]
struct RepairState {
    prev: Option<ChunkTag>,
}

impl RepairState {
    /// Repair `tag` against the previous one, and remember the result.
    fn repair(&mut self, tag: ChunkTag) -> ChunkTag {
        let open = self.prev.as_ref().map(ChunkTag::kind);
        let tag = if tag.label() == Label::I && !tag.continues(open) {
            debug!("illegal continuation {} after {:?}", tag, self.prev);
            tag.into_opener()
        } else {
            tag
        };
        self.prev = Some(tag.clone());
        tag
    }

    fn reset(&mut self) {
        self.prev = None;
    }
}

impl Transform for ChunkRepair {
    fn transform_own(&self, lines: Vec<Line>) -> Vec<Line> {
        let mut state = RepairState::default();
        lines
            .into_iter()
            .map(|line| match line {
                Line::Record(mut r) => {
                    r.chunk = r.chunk.map(|tag| state.repair(tag));
                    Line::Record(r)
                }
                Line::Blank => {
                    state.reset();
                    Line::Blank
                }
            })
            .collect()
    }
}
