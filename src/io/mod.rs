/*!
# IO utilities

Whole-file line reading and atomic writing of converted files.

Files are fully buffered in memory: a file is either converted completely, or not written at all.
!*/
mod reader;
mod writer;

pub use reader::read_lines;
pub use writer::write_atomic;
