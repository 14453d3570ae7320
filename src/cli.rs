//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use conll_ssf::Mode;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
///
/// ```sh
/// conll2ssf 0.1.0
/// Convert CoNLL files into SSF.
///
/// USAGE:
///     conll2ssf [FLAGS] --input <input> --opr <opr> --output <output>
///
/// FLAGS:
///         --flush-last    also convert a last sentence that is not followed by a blank line
///     -h, --help          Prints help information
///     -V, --version       Prints version information
///
/// OPTIONS:
///         --input <input>      input folder of CoNLL files
///         --opr <opr>          operation: 0 for POS tagging, 1 for chunking [possible values: 0, 1]
///         --output <output>    output folder of SSF files
/// ```
#[structopt(name = "conll2ssf", about = "Convert CoNLL files into SSF.")]
pub struct Conll2Ssf {
    #[structopt(long = "input", parse(from_os_str), help = "input folder of CoNLL files")]
    pub input: PathBuf,
    #[structopt(
        long = "output",
        parse(from_os_str),
        help = "output folder of SSF files (created if absent)"
    )]
    pub output: PathBuf,
    #[structopt(
        long = "opr",
        possible_values = &["0", "1"],
        help = "operation: 0 for POS tagging, 1 for chunking"
    )]
    pub opr: Mode,
    #[structopt(
        long = "flush-last",
        help = "also convert a last sentence that is not followed by a blank line"
    )]
    pub flush_last: bool,
}
