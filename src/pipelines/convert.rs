//! CoNLL to SSF conversion pipeline
//!
//! Each file of the input directory (walked recursively) is converted independently
//! and written in the output directory under the same file name.
//!
//! # Processing
//! 1. Lines are read and parsed according to the [Mode].
//! 1. In chunk mode, tags go through [TagRepair] (punctuation override, then BIO repair).
//! 1. The SSF document is built and written atomically.
//!
//! Files are processed concurrently. A failing file is logged and skipped,
//! without any output file being written for it.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::conll::{parse_lines, Mode};
use crate::error::Error;
use crate::io::{read_lines, write_atomic};
use crate::pipelines::pipeline::Pipeline;
use crate::ssf::{build, ChunkBuilder, Document, PosBuilder, Trailing};
use crate::transformers::{TagRepair, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub mode: Mode,
    pub trailing: Trailing,
}

impl ConvertOptions {
    pub fn new(mode: Mode, trailing: Trailing) -> Self {
        Self { mode, trailing }
    }
}

/// Convert raw CoNLL lines into an SSF document.
///
/// Fails on the first malformed line.
pub fn convert_lines<S: AsRef<str>>(
    raw: &[S],
    options: &ConvertOptions,
) -> Result<Document, Error> {
    let lines = parse_lines(raw, options.mode)?;
    let document = match options.mode {
        Mode::Pos => build(PosBuilder::default(), &lines, options.trailing)?,
        Mode::Chunk => {
            let lines = TagRepair::default().transform_own(lines);
            build(ChunkBuilder::default(), &lines, options.trailing)?
        }
    };
    Ok(document)
}

/// Outcome of a [Convert] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Successfully converted files.
    pub files: usize,
    pub failed: usize,
    /// Sentences written, over all converted files.
    pub sentences: usize,
}

pub struct Convert {
    src: PathBuf,
    dst: PathBuf,
    options: ConvertOptions,
}

impl Convert {
    pub fn new(src: PathBuf, dst: PathBuf, options: ConvertOptions) -> Self {
        if options.trailing == Trailing::Drop {
            debug!("last sentences not followed by a blank line will be dropped");
        }
        Self { src, dst, options }
    }

    /// list files in source folder, recursively and sorted.
    ///
    /// Unreadable entries are logged and skipped.
    fn get_paths(&self) -> Result<Vec<PathBuf>, Error> {
        let src = self
            .src
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid source folder: {:?}", self.src)))?;
        let pattern = format!("{}/**/*", glob::Pattern::escape(src));

        let mut paths: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(|entry| {
                entry.map_or_else(
                    |e| {
                        error!("error reading input directory: {}", e);
                        None
                    },
                    Some,
                )
            })
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Output path of `path`: same file name, in the destination folder.
    fn get_dst_path(&self, path: &Path) -> Result<PathBuf, Error> {
        let filename = path
            .file_name()
            .ok_or_else(|| Error::Custom(format!("invalid source file: {:?}", path)))?;
        Ok(self.dst.join(filename))
    }

    /// Keep the first file for each file name,
    /// since files from different subfolders would end up on the same output file.
    ///
    /// Returns the kept paths along with the number of rejected ones.
    fn dedup_names(paths: Vec<PathBuf>) -> (Vec<PathBuf>, usize) {
        let mut names = HashSet::new();
        let mut rejected = 0;
        let kept = paths
            .into_iter()
            .filter(|path| {
                let name = path.file_name().map(|n| n.to_os_string());
                if names.insert(name) {
                    true
                } else {
                    error!("{:?}: output file name already used by another input file", path);
                    rejected += 1;
                    false
                }
            })
            .collect();
        (kept, rejected)
    }

    /// Convert a single file, returning the number of written sentences.
    fn convert_file(&self, path: &Path) -> Result<usize, Error> {
        let raw = read_lines(path)?;
        let document = convert_lines(&raw, &self.options)?;
        let dst = self.get_dst_path(path)?;
        write_atomic(&document.render(), &dst)?;

        info!(
            "{:?} -> {:?}: {} sentences",
            path,
            dst,
            document.sentences()
        );
        Ok(document.sentences())
    }
}

impl Pipeline<Summary> for Convert {
    fn run(&self) -> Result<Summary, Error> {
        if !self.src.is_dir() {
            return Err(Error::Custom(format!(
                "Source has to be a readable directory: {:?}",
                self.src
            )));
        }

        if !self.dst.exists() {
            warn!("Destination folder does not exist. Creating");
            std::fs::create_dir_all(&self.dst)?;
        }

        if !self.dst.is_dir() {
            return Err(Error::Custom(format!(
                "Destination has to be a directory: {:?}",
                self.dst
            )));
        }

        let (paths, rejected) = Self::dedup_names(self.get_paths()?);
        info!(
            "converting {} files ({} mode) from {:?} to {:?}",
            paths.len(),
            self.options.mode,
            self.src,
            self.dst
        );

        let results: Vec<Result<usize, Error>> = paths
            .par_iter()
            .map(|path| {
                self.convert_file(path).map_err(|e| {
                    error!("{:?}: {:?}", path, e);
                    e
                })
            })
            .collect();

        let summary = results.iter().fold(
            Summary {
                failed: rejected,
                ..Default::default()
            },
            |mut summary, result| {
                match result {
                    Ok(sentences) => {
                        summary.files += 1;
                        summary.sentences += sentences;
                    }
                    Err(_) => summary.failed += 1,
                }
                summary
            },
        );

        info!(
            "done: {} files converted, {} failed, {} sentences",
            summary.files, summary.failed, summary.sentences
        );
        Ok(summary)
    }
}
