//! # conll2ssf
//!
//! Converts a folder of CoNLL files into SSF files.
//!
//! ```sh
//! conll2ssf --input data/conll --output data/ssf --opr 1
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).

use conll_ssf::error::Error;
use conll_ssf::pipelines::{Convert, ConvertOptions, Pipeline};
use conll_ssf::ssf::Trailing;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Conll2Ssf::from_args();
    debug!("cli args\n{:#?}", opt);

    let trailing = if opt.flush_last {
        Trailing::Flush
    } else {
        Trailing::Drop
    };
    let options = ConvertOptions::new(opt.opr, trailing);

    let p = Convert::new(opt.input, opt.output, options);
    let summary = p.run()?;

    if summary.failed > 0 {
        error!("{} files could not be converted", summary.failed);
        return Err(Error::Custom(
            "Errors occurred during conversion: see previous messages.".to_string(),
        ));
    }
    Ok(())
}
