/*! Record transformers.

Rewrite tags of parsed CoNLL lines before they are turned into SSF.
Transformers never add nor remove lines, and blank lines are always passed through.

[TagRepair] chains the punctuation override and the chunk tag repair, and is what chunking input goes through.
!*/

mod chunk_repair;
mod punctuation;
mod repair;
mod transform;

pub use chunk_repair::ChunkRepair;
pub use punctuation::{PunctuationNormalizer, PUNC_MARKERS, SYMBOLS};
pub use repair::TagRepair;
pub use transform::Transform;
