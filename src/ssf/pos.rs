//! POS mode: one numbered line per token.
//!
//! ```text
//! <Sentence id='1'>
//! 1	Dog	NN	
//! 2	barks	VM	
//! </Sentence>
//! ```
use super::builder::SsfBuilder;
use super::document::SentenceBlock;
use super::Document;
use crate::conll::Record;
use crate::error::FormatErrorKind;

#[derive(Debug)]
pub struct PosBuilder {
    document: Document,
    /// Current sentence id (1-based, document-wide).
    sent_count: usize,
    /// Next token index in the current sentence (1-based).
    cntr: usize,
    block: SentenceBlock,
}

impl Default for PosBuilder {
    fn default() -> Self {
        Self {
            document: Document::default(),
            sent_count: 1,
            cntr: 1,
            block: SentenceBlock::open(1),
        }
    }
}

impl SsfBuilder for PosBuilder {
    fn push(&mut self, record: &Record) -> Result<(), FormatErrorKind> {
        self.block
            .push(format!("{}\t{}\t{}\t", self.cntr, record.token, record.pos));
        self.cntr += 1;
        Ok(())
    }

    fn end_sentence(&mut self) {
        self.sent_count += 1;
        self.cntr = 1;
        let block = std::mem::replace(&mut self.block, SentenceBlock::open(self.sent_count));
        self.document.push_sentence(block.close());
    }

    fn has_pending(&self) -> bool {
        !self.block.is_empty()
    }

    fn sentence_id(&self) -> usize {
        self.sent_count
    }

    fn into_document(self) -> Document {
        self.document
    }
}
