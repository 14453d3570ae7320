//! Line reading.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Error;

/// Read all lines of a UTF-8 file, without their line terminators.
///
/// Invalid UTF-8 is reported as an IO error.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let f = File::open(path)?;
    let lines: Result<Vec<String>, std::io::Error> = BufReader::new(f).lines().collect();
    Ok(lines?)
}
