//! Chunk mode: tokens nested in numbered bracket groups.
//!
//! ```text
//! <Sentence id='1'>
//! 1	((	NP	
//! 1.1	the	DT	
//! 1.2	dog	NN	
//! 	))
//! 2	((	VGF	
//! 2.1	barks	VM	
//! 	))
//! </Sentence>
//! ```
//!
//! Input is not assumed to be repaired: any tag that does not legally continue
//! the open group (see [ChunkTag::continues]) opens a new one.
use super::builder::SsfBuilder;
use super::document::SentenceBlock;
use super::Document;
use crate::conll::{ChunkTag, Record};
use crate::error::FormatErrorKind;

const CLOSE_GROUP: &str = "\t))";

#[derive(Debug)]
pub struct ChunkBuilder {
    document: Document,
    sent_count: usize,
    /// Number of the current group (1-based, reset on each sentence).
    cntr: usize,
    /// Next token index in the current group (1-based).
    subcntr: usize,
    /// Type of the open group, `None` until a group is opened in the sentence.
    open: Option<String>,
    block: SentenceBlock,
}

impl Default for ChunkBuilder {
    fn default() -> Self {
        Self {
            document: Document::default(),
            sent_count: 1,
            cntr: 1,
            subcntr: 1,
            open: None,
            block: SentenceBlock::open(1),
        }
    }
}

impl ChunkBuilder {
    /// Close the open group if any, then open a new one of type `kind`.
    fn open_group(&mut self, kind: &str) {
        if self.open.is_some() {
            self.block.push(CLOSE_GROUP.to_string());
            self.cntr += 1;
        }
        self.block.push(format!("{}\t((\t{}\t", self.cntr, kind));
        self.subcntr = 1;
        self.open = Some(kind.to_string());
    }
}

impl SsfBuilder for ChunkBuilder {
    fn push(&mut self, record: &Record) -> Result<(), FormatErrorKind> {
        let tag: &ChunkTag = record
            .chunk
            .as_ref()
            .ok_or_else(|| FormatErrorKind::MalformedChunkTag(String::new()))?;

        if !tag.continues(self.open.as_deref()) {
            self.open_group(tag.kind());
        }

        self.block.push(format!(
            "{}.{}\t{}\t{}\t",
            self.cntr, self.subcntr, record.token, record.pos
        ));
        self.subcntr += 1;
        Ok(())
    }

    fn end_sentence(&mut self) {
        if self.open.take().is_some() {
            self.block.push(CLOSE_GROUP.to_string());
        }
        self.sent_count += 1;
        self.cntr = 1;
        self.subcntr = 1;
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

#[cfg(test)]
mod tests {
    use super::ChunkBuilder;
    use crate::conll::{parse_lines, Line, Mode, Record};
    use crate::error::FormatErrorKind;
    use crate::ssf::{build, SsfBuilder, Trailing};

    fn lines(raw: &[&str]) -> Vec<String> {
        let parsed = parse_lines(raw, Mode::Chunk).unwrap();
        build(ChunkBuilder::default(), &parsed, Trailing::Drop)
            .unwrap()
            .lines()
            .to_vec()
    }

    #[test]
    fn groups() {
        let out = lines(&[
            "the\tDT\tB-NP",
            "dog\tNN\tI-NP",
            "barks\tVM\tB-VGF",
            "",
            "it\tPRP\tB-NP",
            "",
        ]);
        assert_eq!(
            out,
            vec![
                "<Sentence id='1'>",
                "1\t((\tNP\t",
                "1.1\tthe\tDT\t",
                "1.2\tdog\tNN\t",
                "\t))",
                "2\t((\tVGF\t",
                "2.1\tbarks\tVM\t",
                "\t))",
                "</Sentence>",
                "",
                "<Sentence id='2'>",
                "1\t((\tNP\t",
                "1.1\tit\tPRP\t",
                "\t))",
                "</Sentence>",
                "",
            ]
        );
    }

    #[test]
    fn consecutive_openers_of_same_type() {
        let out = lines(&["a\tX\tB-NP", "b\tX\tB-NP", ""]);
        assert_eq!(
            &out[1..7],
            &["1\t((\tNP\t", "1.1\ta\tX\t", "\t))", "2\t((\tNP\t", "2.1\tb\tX\t", "\t))"]
        );
    }

    #[test]
    fn unrepaired_inside_opens_group() {
        // not repaired upstream: the builder checks transitions itself
        let out = lines(&["Hi\tNNP\tI-NP", "a\tX\tI-VP", "b\tX\tI-VP", ""]);
        assert_eq!(
            out,
            vec![
                "<Sentence id='1'>",
                "1\t((\tNP\t",
                "1.1\tHi\tNNP\t",
                "\t))",
                "2\t((\tVP\t",
                "2.1\ta\tX\t",
                "2.2\tb\tX\t",
                "\t))",
                "</Sentence>",
                "",
            ]
        );
    }

    #[test]
    fn empty_sentence_has_no_brackets() {
        let out = lines(&["", "a\tX\tB-NP", ""]);
        assert_eq!(&out[..3], &["<Sentence id='1'>", "</Sentence>", ""]);
        assert_eq!(out[3], "<Sentence id='2'>");
    }

    #[test]
    fn trailing_flush_closes_group() {
        let parsed = parse_lines(&["a\tX\tB-NP"], Mode::Chunk).unwrap();
        let doc = build(ChunkBuilder::default(), &parsed, Trailing::Flush).unwrap();
        assert_eq!(
            doc.render(),
            "<Sentence id='1'>\n1\t((\tNP\t\n1.1\ta\tX\t\n\t))\n</Sentence>\n\n"
        );

        let doc = build(ChunkBuilder::default(), &parsed, Trailing::Drop).unwrap();
        assert_eq!(doc.sentences(), 0);
    }

    #[test]
    fn record_without_chunk_tag() {
        let mut builder = ChunkBuilder::default();
        let err = builder.push(&Record::new("a", "X", None)).unwrap_err();
        assert!(matches!(err, FormatErrorKind::MalformedChunkTag(_)));

        let lines = vec![Line::Blank, Line::Record(Record::new("a", "X", None))];
        let err = build(ChunkBuilder::default(), &lines, Trailing::Drop).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.content, "a\tX");
    }

    #[test]
    fn brackets_balanced() {
        let out = lines(&[
            "a\tX\tI-NP",
            "b\tX\tB-VP",
            "c\tX\tI-NP",
            "",
            "",
            "d\tX\tB-NP",
            "e\tX\tI-NP",
            "",
        ]);
        let opened = out.iter().filter(|l| l.contains("\t((\t")).count();
        let closed = out.iter().filter(|l| *l == "\t))").count();
        assert_eq!(opened, 4);
        assert_eq!(opened, closed);
    }
}
