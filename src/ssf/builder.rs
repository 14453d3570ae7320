//! Builder trait and the line-level driver shared by both modes.
use log::warn;

use super::{Document, Trailing};
use crate::conll::{Line, Record};
use crate::error::{FormatError, FormatErrorKind};

/// A state machine turning records into SSF sentences.
///
/// Builders own the counters of the sentence being built
/// and are driven by [build].
pub trait SsfBuilder {
    /// Add a record to the current sentence.
    fn push(&mut self, record: &Record) -> Result<(), FormatErrorKind>;

    /// Terminate the current sentence, append it to the document and open the next one.
    fn end_sentence(&mut self);

    /// `true` if the current sentence holds records that have not been appended yet.
    fn has_pending(&self) -> bool;

    /// Id of the current (not yet finalized) sentence.
    fn sentence_id(&self) -> usize;

    fn into_document(self) -> Document;
}

/// Feed `lines` to `builder` and return the finished document.
///
/// Blank lines terminate sentences. A sentence that is still pending at the end
/// of the input is handled according to `trailing`.
///
/// On error, the [FormatError] content is the record as given to the builder,
/// that is after any tag repair, and not the original input text.
pub fn build<B: SsfBuilder>(
    mut builder: B,
    lines: &[Line],
    trailing: Trailing,
) -> Result<Document, FormatError> {
    for (idx, line) in lines.iter().enumerate() {
        match line {
            Line::Blank => builder.end_sentence(),
            Line::Record(r) => builder
                .push(r)
                .map_err(|kind| FormatError::new(idx + 1, &r.to_string(), kind))?,
        }
    }

    if builder.has_pending() {
        match trailing {
            Trailing::Flush => builder.end_sentence(),
            Trailing::Drop => warn!(
                "sentence {} is not followed by a blank line and is dropped",
                builder.sentence_id()
            ),
        }
    }

    Ok(builder.into_document())
}
