/*! SSF (Shakti Standard Format) output

Sentences are wrapped in `<Sentence id='N'>`/`</Sentence>` markers, `N` being 1-based and document-wide.
Each token line is `index \t token \t tag \t`, the trailing tab being part of the format.

- [PosBuilder] numbers tokens `1`, `2`... in each sentence.
- [ChunkBuilder] nests tokens into `((`/`))` bracket groups, numbered `1`, `2`... in each sentence,
  tokens being numbered `group.index`.

Builders are driven by [build], which also applies the [Trailing] policy.
!*/
mod builder;
mod chunk;
mod document;
mod pos;
pub mod reader;

pub use builder::{build, SsfBuilder};
pub use chunk::ChunkBuilder;
pub use document::Document;
pub use pos::PosBuilder;

/// What to do with a last sentence that is not followed by a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trailing {
    /// Leave it out of the document (a warning is logged).
    ///
    /// This is the behaviour downstream consumers of the tool's previous output rely on.
    #[default]
    Drop,
    /// Terminate it as if a blank line followed.
    Flush,
}
