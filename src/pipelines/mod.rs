//! Pipelines.
//!
//! [Convert] converts a directory of CoNLL files into SSF files, and
//! [convert_lines] is the in-memory conversion it runs on each file.
mod convert;
pub mod pipeline;

pub use convert::{convert_lines, Convert, ConvertOptions, Summary};
pub use pipeline::Pipeline;
