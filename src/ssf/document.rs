//! SSF document buffer.
//!
//! Output is accumulated as a sequence of lines and rendered once.
use std::fmt;

/// Finalized SSF sentences, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    sentences: usize,
}

impl Document {
    /// Append a finalized sentence block.
    ///
    /// The block is followed by an empty line.
    pub fn push_sentence(&mut self, block: Vec<String>) {
        self.lines.extend(block);
        self.lines.push(String::new());
        self.sentences += 1;
    }

    /// Number of finalized sentences.
    pub fn sentences(&self) -> usize {
        self.sentences
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the document, each line being terminated by `\n`.
    pub fn render(&self) -> String {
        let size = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(size);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Lines of the sentence being built.
#[derive(Debug)]
pub(super) struct SentenceBlock {
    lines: Vec<String>,
}

impl SentenceBlock {
    pub fn open(id: usize) -> Self {
        Self {
            lines: vec![format!("<Sentence id='{}'>", id)],
        }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// `true` if nothing but the opening marker has been pushed.
    pub fn is_empty(&self) -> bool {
        self.lines.len() <= 1
    }

    /// Terminate the block, returning its lines.
    pub fn close(mut self) -> Vec<String> {
        self.lines.push("</Sentence>".to_string());
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, SentenceBlock};

    #[test]
    fn render() {
        let mut doc = Document::default();
        assert_eq!(doc.render(), "");

        let mut block = SentenceBlock::open(1);
        assert!(block.is_empty());
        block.push("1\tDog\tNN\t".to_string());
        assert!(!block.is_empty());
        doc.push_sentence(block.close());

        assert_eq!(doc.sentences(), 1);
        assert_eq!(doc.render(), "<Sentence id='1'>\n1\tDog\tNN\t\n</Sentence>\n\n");
        assert_eq!(doc.to_string(), doc.render());
    }
}
